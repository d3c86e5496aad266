/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST against a [`Context`](evaluator::core::Context),
/// performs arithmetic and logical operations, and routes every property
/// reference and function call through the context's accessor and resolver
/// chains.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Consults the ordered capability chains; the first capable entry wins.
/// - Reports runtime errors with the source position of the failing node.
pub mod evaluator;
/// The lexer module tokenizes expression text for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as numbers,
/// strings, identifiers, operators and delimiters. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with their byte offsets.
/// - Handles numeric and string literals, identifiers, and operators.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an immutable tree. Parsing never evaluates anything.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates correct grammar and syntax, reporting errors with positions.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum and its type tags.
/// - Defines the host object traits and the stock `PropertyMap`.
/// - Provides the numeric coercion applied to stored strings.
pub mod value;
/// Property accessors.
///
/// An accessor knows how to read (and optionally write) named properties on
/// some kind of target value. The context keeps an ordered list of them.
pub mod accessor;
/// Function resolvers.
///
/// A resolver maps a call name, target and argument types to an executor.
/// The context keeps an ordered list of them.
pub mod resolver;
