mod args;
#[cfg(feature = "async")]
mod async_console;
mod mock;
