mod atoms_tests;
mod groups_tests;
mod quantifiers_tests;
