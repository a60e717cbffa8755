mod confirmation_tests;
mod index_tests;
