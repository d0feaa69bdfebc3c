/// The scanner module turns source text into tokens.
///
/// The scanner reads the raw source one character at a time and produces
/// names, keywords, numeric literals, symbols and line ends. A small state
/// machine decides where a numeric literal ends. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Skips spaces, tabs and `//` comments.
/// - Flags numeric literals that end in a dangling exponent or sign.
/// - Supports pushing back exactly one token for parser lookahead.
pub mod scanner;
/// The parser module builds the abstract syntax tree from tokens.
///
/// The parser pulls tokens from the scanner and assembles a `Tree<Token>` on
/// an explicit stack, combining partial trees as each grammar rule
/// completes.
///
/// # Responsibilities
/// - Recognizes commands, blocks, procedures and whole programs.
/// - Encodes operator precedence and left associativity in the tree shape.
/// - Reports syntax errors with the line and the stack contents.
pub mod parser;
/// The evaluator module executes program trees.
///
/// The evaluator walks the tree produced by the parser, evaluates
/// expressions and conditions, manages variable frames and procedure calls,
/// and sends every visible effect to an actuator.
///
/// # Responsibilities
/// - Evaluates arithmetic with the same layering the parser used.
/// - Keeps local and global scopes and the procedure registry.
/// - Reports runtime errors such as unknown names or bad color components.
pub mod evaluator;
/// Cooperative run control.
///
/// Shared running, paused and speed flags that a controller flips and the
/// evaluator polls.
pub mod control;
/// Background runs.
pub mod session;
