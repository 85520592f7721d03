mod endpoint_tests;
mod page_tests;
