use crate::game::Move;
use crate::gameroom::*;

/// Cycles through a fixed script of moves forever.
#[derive(Debug, Clone)]
pub struct Pattern {
    script: Vec<Move>,
    index: usize,
}

/// One move per letter, e.g. "RPS" or "RRP". Whitespace is ignored.
impl TryFrom<&str> for Pattern {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let script = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| Move::try_from(c.to_string().as_str()))
            .collect::<Result<Vec<Move>, _>>()?;
        match script.is_empty() {
            true => Err(format!("empty pattern: {:?}", s)),
            false => Ok(Self { script, index: 0 }),
        }
    }
}

impl Opponent for Pattern {
    fn name(&self) -> String {
        format!(
            "Pattern {}",
            self.script.iter().map(Move::initial).collect::<String>()
        )
    }
    fn choose(&mut self) -> anyhow::Result<Option<Move>> {
        let next = self.script[self.index % self.script.len()];
        self.index += 1;
        Ok(Some(next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycles_the_script() {
        let mut pattern = Pattern::try_from("r p s").unwrap();
        let moves = (0..7)
            .map(|_| pattern.choose().unwrap().unwrap())
            .collect::<Vec<_>>();
        assert!(moves[..3] == Move::all());
        assert!(moves[3..6] == Move::all());
        assert!(moves[6] == Move::Rock);
        assert!(pattern.name() == "Pattern RPS");
    }

    #[test]
    fn rejects_bad_scripts() {
        assert!(Pattern::try_from("").is_err());
        assert!(Pattern::try_from("   ").is_err());
        assert!(Pattern::try_from("RPX").is_err());
    }
}
