/// Represents all errors that can occur while interpreting a program.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RuntimeError {
    /// A name was read that is neither a local nor a global variable.
    #[error("Unknown variable '{name}'.")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// `do` named a procedure that the program does not define.
    #[error("Unknown procedure '{name}'.")]
    UndefinedProcedure {
        /// The name of the procedure.
        name: String,
    },
    /// A procedure was called with the wrong number of arguments.
    #[error("Procedure '{name}' takes {expected} argument(s) but {found} were given.")]
    ArityMismatch {
        /// The name of the procedure.
        name:     String,
        /// The number of declared parameters.
        expected: usize,
        /// The number of arguments supplied.
        found:    usize,
    },
    /// A chain of procedure calls grew past the call depth limit.
    #[error("Procedure '{name}' exceeded the maximum call depth of {depth}.")]
    RecursionLimit {
        /// The procedure whose call went over the limit.
        name:  String,
        /// The call depth limit.
        depth: usize,
    },
    /// A color component fell outside `0..=255`.
    #[error("Color component {value} is outside of the range 0 to 255, inclusive.")]
    Range {
        /// The offending component value.
        value: f64,
    },
    /// A value had an unexpected or incompatible type.
    #[error("Type error: {details}.")]
    Type {
        /// Details about the mismatch.
        details: String,
    },
    /// A node names a command, comparator or operator the interpreter does
    /// not implement.
    #[error("Unsupported operation '{operation}'.")]
    UnsupportedOperation {
        /// The text of the offending node.
        operation: String,
    },
    /// A statement node has the wrong number of children.
    #[error("A '{command}' node must have {expected} children but has {found}.")]
    MalformedNode {
        /// The command the node represents.
        command:  String,
        /// The required number of children.
        expected: String,
        /// The actual number of children.
        found:    usize,
    },
}
