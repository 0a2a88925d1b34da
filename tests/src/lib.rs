mod intake;
mod utils;
