mod selection_key_tests;
mod utils;
