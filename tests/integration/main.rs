mod cli_test;
mod properties_test;
