//! The Blink language interpreter library.
//!
//! This library provides the core components of the Blink interpreter:
//! lexical analysis, parsing, and tree-walking evaluation.
//!
//! # Modules
//!
//! - [`token`] - Token types and source location tracking
//! - [`lexer`] - Lexical analysis (tokenization)
//! - [`parser`] - Recursive descent parser
//! - [`ast`] - Abstract Syntax Tree definitions
//! - [`scope`] - The flat registry of named definitions
//! - [`interpreter`] - Tree-walking evaluator
//!
//! # Example
//!
//! ```
//! use blink::interpreter::Interpreter;
//! use blink::lexer::Lexer;
//! use blink::parser::Parser;
//!
//! // Source code to run
//! let source = r#"String greeting = "Hello, World!";print(greeting);"#;
//!
//! // Lexical analysis
//! let mut lexer = Lexer::new(source);
//! let tokens = lexer.tokenize().expect("Lexer error");
//!
//! // Parsing
//! let mut parser = Parser::new(tokens);
//! let root = parser.parse().expect("Parse error");
//!
//! // Evaluation
//! let mut interpreter = Interpreter::with_output(Vec::new());
//! interpreter.visit(&root).expect("Runtime error");
//! assert_eq!(interpreter.into_output(), b"Hello, World!\n");
//! ```

pub mod ast;
pub mod interpreter;
pub mod lexer;
pub mod parser;
pub mod scope;
pub mod token;
