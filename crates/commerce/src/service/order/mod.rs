mod command;

pub use self::command::OrderCommandService;
