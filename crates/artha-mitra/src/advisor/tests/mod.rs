mod common;
mod goals;
mod intake;
mod schemes;
