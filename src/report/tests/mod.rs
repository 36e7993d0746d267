mod decode_tests;
mod normalize_tests;
