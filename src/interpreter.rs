/// The rewriter module turns keypad syntax into evaluator syntax.
///
/// Before an expression is tokenized, an ordered list of textual rules
/// replaces display symbols with operators and identifiers, marks the
/// arguments of trigonometric functions as degrees and expands percent
/// signs.
///
/// # Responsibilities
/// - Keeps every rewrite a separate, individually testable rule.
/// - Applies the rules in a fixed, documented order.
/// - Never fails; malformed input is left for later stages to reject.
pub mod rewriter;
/// The lexer module tokenizes expressions for further parsing.
///
/// The lexer reads the rewritten text and produces a stream of tokens:
/// numbers, identifiers, operators, parentheses and commas, each paired with
/// its byte offset.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source positions.
/// - Handles integer, decimal and exponent number forms.
/// - Reports the first unrecognized character.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST that encodes precedence and associativity.
///
/// # Responsibilities
/// - Converts tokens into `Expr` nodes.
/// - Validates the grammar, reporting errors with positions.
/// - Supports arithmetic, grouping, references and function calls.
pub mod parser;
/// The evaluator module computes the value of an AST.
///
/// The evaluator traverses the AST, resolves constants and the answer
/// register, applies operators and builtin functions and checks every
/// intermediate value.
///
/// # Responsibilities
/// - Evaluates AST nodes to finite real numbers.
/// - Reports unknown names, undefined operations and overflow.
/// - Never modifies the registers it reads.
pub mod evaluator;
/// The registers module holds the memory and last-answer cells.
///
/// # Responsibilities
/// - Stores the two registers with zero defaults.
/// - Guarantees both always hold finite numbers.
pub mod registers;
