use crate::Arbitrary;
use crate::game::Move;
use crate::gameroom::*;

/// Example opponent that throws uniformly at random.
/// Nothing can exploit it, so ensemble scores should hover near zero.
#[derive(Debug, Default)]
pub struct Fish;

impl Opponent for Fish {
    fn name(&self) -> String {
        String::from("Fish")
    }
    fn choose(&mut self) -> anyhow::Result<Option<Move>> {
        Ok(Some(Move::random()))
    }
}
