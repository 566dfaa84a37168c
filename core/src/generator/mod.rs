use crate::*;
pub use random::*;

mod random;

pub trait MineGenerator {
    fn generate(self, config: BoardConfig) -> MineLayout;
}
