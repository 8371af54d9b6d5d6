mod default_value_emitter_tests;
mod test_utils;
