pub mod brain;
pub mod interact;
pub mod movement;
