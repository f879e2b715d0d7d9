//! Game flow: session state, the memorization timer and the state machine.

pub mod machine;
pub mod session;
pub mod timer;

pub use machine::{GameMachine, GameOptions};
pub use session::{Guess, Phase, Round, RoundResult, Session, Target};
pub use timer::{MemorizeTimer, TimerEvent};
