mod tests_parser_test_method;
