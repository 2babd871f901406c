mod statement_parser;

pub use statement_parser::parse_statement;
