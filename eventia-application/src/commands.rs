pub mod filter_commands;
