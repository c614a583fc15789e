//! Node kinds and field names produced by the Solidity grammar.
//!
//! Use these with [`tree_sitter::Node::kind`] and
//! [`tree_sitter::Node::child_by_field_name`] instead of spelling the strings
//! out at each call site.

// Top level
pub const SOURCE_FILE: &str = "source_file";
pub const PRAGMA_DIRECTIVE: &str = "pragma_directive";
pub const SOLIDITY_VERSION: &str = "solidity_version";
pub const IMPORT_DIRECTIVE: &str = "import_directive";

// Declarations
pub const CONTRACT_DECLARATION: &str = "contract_declaration";
pub const INTERFACE_DECLARATION: &str = "interface_declaration";
pub const LIBRARY_DECLARATION: &str = "library_declaration";
pub const STRUCT_DECLARATION: &str = "struct_declaration";
pub const ENUM_DECLARATION: &str = "enum_declaration";
pub const EVENT_DEFINITION: &str = "event_definition";
pub const ERROR_DECLARATION: &str = "error_declaration";
pub const FUNCTION_DEFINITION: &str = "function_definition";
pub const MODIFIER_DEFINITION: &str = "modifier_definition";
pub const CONSTRUCTOR_DEFINITION: &str = "constructor_definition";
pub const FALLBACK_RECEIVE_DEFINITION: &str = "fallback_receive_definition";
pub const STATE_VARIABLE_DECLARATION: &str = "state_variable_declaration";
pub const USER_DEFINED_TYPE_DEFINITION: &str = "user_defined_type_definition";
pub const USING_DIRECTIVE: &str = "using_directive";

// Bodies and members
pub const CONTRACT_BODY: &str = "contract_body";
pub const STRUCT_BODY: &str = "struct_body";
pub const STRUCT_MEMBER: &str = "struct_member";
pub const ENUM_BODY: &str = "enum_body";
pub const INHERITANCE_SPECIFIER: &str = "inheritance_specifier";
pub const FUNCTION_BODY: &str = "function_body";
pub const PARAMETER: &str = "parameter";
pub const MODIFIER_INVOCATION: &str = "modifier_invocation";

// Statements
pub const BLOCK_STATEMENT: &str = "block_statement";
pub const EXPRESSION_STATEMENT: &str = "expression_statement";
pub const VARIABLE_DECLARATION_STATEMENT: &str = "variable_declaration_statement";
pub const IF_STATEMENT: &str = "if_statement";
pub const FOR_STATEMENT: &str = "for_statement";
pub const WHILE_STATEMENT: &str = "while_statement";
pub const RETURN_STATEMENT: &str = "return_statement";
pub const EMIT_STATEMENT: &str = "emit_statement";
pub const REVERT_STATEMENT: &str = "revert_statement";
pub const ASSEMBLY_STATEMENT: &str = "assembly_statement";

// Expressions
pub const CALL_EXPRESSION: &str = "call_expression";
pub const MEMBER_EXPRESSION: &str = "member_expression";
pub const BINARY_EXPRESSION: &str = "binary_expression";
pub const ASSIGNMENT_EXPRESSION: &str = "assignment_expression";
pub const AUGMENTED_ASSIGNMENT_EXPRESSION: &str = "augmented_assignment_expression";

// Types
pub const TYPE_NAME: &str = "type_name";
pub const PRIMITIVE_TYPE: &str = "primitive_type";
pub const USER_DEFINED_TYPE: &str = "user_defined_type";

// Literals
pub const STRING: &str = "string";
pub const NUMBER_LITERAL: &str = "number_literal";
pub const BOOLEAN_LITERAL: &str = "boolean_literal";
pub const HEX_STRING_LITERAL: &str = "hex_string_literal";

// Other
pub const IDENTIFIER: &str = "identifier";
pub const COMMENT: &str = "comment";
/// Not part of the grammar; the runtime emits it around unparseable input.
pub const ERROR: &str = "ERROR";

/// Every grammar node kind above, in declaration order.
pub const ALL: &[&str] = &[
    SOURCE_FILE,
    PRAGMA_DIRECTIVE,
    SOLIDITY_VERSION,
    IMPORT_DIRECTIVE,
    CONTRACT_DECLARATION,
    INTERFACE_DECLARATION,
    LIBRARY_DECLARATION,
    STRUCT_DECLARATION,
    ENUM_DECLARATION,
    EVENT_DEFINITION,
    ERROR_DECLARATION,
    FUNCTION_DEFINITION,
    MODIFIER_DEFINITION,
    CONSTRUCTOR_DEFINITION,
    FALLBACK_RECEIVE_DEFINITION,
    STATE_VARIABLE_DECLARATION,
    USER_DEFINED_TYPE_DEFINITION,
    USING_DIRECTIVE,
    CONTRACT_BODY,
    STRUCT_BODY,
    STRUCT_MEMBER,
    ENUM_BODY,
    INHERITANCE_SPECIFIER,
    FUNCTION_BODY,
    PARAMETER,
    MODIFIER_INVOCATION,
    BLOCK_STATEMENT,
    EXPRESSION_STATEMENT,
    VARIABLE_DECLARATION_STATEMENT,
    IF_STATEMENT,
    FOR_STATEMENT,
    WHILE_STATEMENT,
    RETURN_STATEMENT,
    EMIT_STATEMENT,
    REVERT_STATEMENT,
    ASSEMBLY_STATEMENT,
    CALL_EXPRESSION,
    MEMBER_EXPRESSION,
    BINARY_EXPRESSION,
    ASSIGNMENT_EXPRESSION,
    AUGMENTED_ASSIGNMENT_EXPRESSION,
    TYPE_NAME,
    PRIMITIVE_TYPE,
    USER_DEFINED_TYPE,
    STRING,
    NUMBER_LITERAL,
    BOOLEAN_LITERAL,
    HEX_STRING_LITERAL,
    IDENTIFIER,
    COMMENT,
];

/// Whether `kind` names a top-level declaration or directive.
pub fn is_declaration(kind: &str) -> bool {
    matches!(
        kind,
        PRAGMA_DIRECTIVE
            | IMPORT_DIRECTIVE
            | USING_DIRECTIVE
            | CONTRACT_DECLARATION
            | INTERFACE_DECLARATION
            | LIBRARY_DECLARATION
            | STRUCT_DECLARATION
            | ENUM_DECLARATION
            | EVENT_DEFINITION
            | ERROR_DECLARATION
            | FUNCTION_DEFINITION
            | USER_DEFINED_TYPE_DEFINITION
    )
}

/// Field names used by the grammar.
pub mod field {
    pub const NAME: &str = "name";
    pub const BODY: &str = "body";
    pub const TYPE: &str = "type";
    pub const RETURN_TYPE: &str = "return_type";
}
