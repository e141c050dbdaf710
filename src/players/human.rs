use crate::game::Move;
use crate::game::Outcome;
use crate::gameroom::*;
use colored::Colorize;
use dialoguer::Input;

/// Interactive opponent reading moves from the terminal.
#[derive(Debug, Default)]
pub struct Human;

impl Opponent for Human {
    fn name(&self) -> String {
        String::from("Human")
    }
    fn choose(&mut self) -> anyhow::Result<Option<Move>> {
        let input = Self::prompt()?;
        match input.trim().eq_ignore_ascii_case("q") {
            true => Ok(None),
            false => Move::try_from(input.as_str())
                .map(Some)
                .map_err(anyhow::Error::msg),
        }
    }
    fn notify(&mut self, round: &Round, tally: &Tally) {
        println!("You chose {}", round.player);
        println!("The computer chose {}", round.cpu);
        match round.outcome() {
            Outcome::Win => println!("{}", "You won!".green()),
            Outcome::Loss => println!("{}", "You lost.".red()),
            Outcome::Tie => println!("{}", "Tie!".yellow()),
        }
        println!("{}", tally);
        println!();
    }
}

impl Human {
    fn prompt() -> anyhow::Result<String> {
        Ok(Input::<String>::new()
            .with_prompt("(R)ock, (P)aper, or (S)cissors? (Q to quit)")
            .validate_with(|i: &String| -> Result<(), &str> {
                match i.trim().eq_ignore_ascii_case("q") || Move::try_from(i.as_str()).is_ok() {
                    true => Ok(()),
                    false => Err("Please enter (R)ock, (P)aper, or (S)cissors"),
                }
            })
            .report(false)
            .interact_text()?)
    }
}
