//! Query document structures consumed by the cost analyzer.
//!
//! The analyzer walks an already-parsed tree; parsing is the embedding
//! engine's job. Builder constructors let hosts and tests assemble documents
//! directly.

use super::value::Value;

/// A parsed query document: operations plus named fragments.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    /// Top-level definitions in document order
    pub definitions: Vec<Definition>,
}

impl Document {
    /// Creates an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an operation definition
    pub fn with_operation(mut self, operation: OperationDefinition) -> Self {
        self.definitions.push(Definition::Operation(operation));
        self
    }

    /// Appends a named fragment definition
    pub fn with_fragment(mut self, fragment: FragmentDefinition) -> Self {
        self.definitions.push(Definition::Fragment(fragment));
        self
    }

    /// Iterates over the operations in document order
    pub fn operations(&self) -> impl Iterator<Item = &OperationDefinition> {
        self.definitions.iter().filter_map(|def| match def {
            Definition::Operation(op) => Some(op),
            Definition::Fragment(_) => None,
        })
    }

    /// Iterates over the named fragments in document order
    pub fn fragments(&self) -> impl Iterator<Item = &FragmentDefinition> {
        self.definitions.iter().filter_map(|def| match def {
            Definition::Fragment(frag) => Some(frag),
            Definition::Operation(_) => None,
        })
    }
}

/// A top-level definition
#[derive(Debug, Clone, PartialEq)]
pub enum Definition {
    /// Executable operation (query, mutation, subscription)
    Operation(OperationDefinition),
    /// Named fragment
    Fragment(FragmentDefinition),
}

/// Operation kinds with a schema root type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

impl OperationKind {
    /// Returns the keyword form of the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Query => "query",
            OperationKind::Mutation => "mutation",
            OperationKind::Subscription => "subscription",
        }
    }
}

/// A single executable operation
#[derive(Debug, Clone, PartialEq)]
pub struct OperationDefinition {
    /// Operation kind
    pub kind: OperationKind,
    /// Optional operation name
    pub name: Option<String>,
    /// Root selection set
    pub selection_set: SelectionSet,
}

impl OperationDefinition {
    /// Creates an operation of the given kind with an empty selection set
    pub fn new(kind: OperationKind) -> Self {
        Self {
            kind,
            name: None,
            selection_set: SelectionSet::new(),
        }
    }

    /// Creates a query operation
    pub fn query() -> Self {
        Self::new(OperationKind::Query)
    }

    /// Creates a mutation operation
    pub fn mutation() -> Self {
        Self::new(OperationKind::Mutation)
    }

    /// Creates a subscription operation
    pub fn subscription() -> Self {
        Self::new(OperationKind::Subscription)
    }

    /// Sets the operation name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Appends a selection to the root selection set
    pub fn with_selection(mut self, selection: impl Into<Selection>) -> Self {
        self.selection_set.items.push(selection.into());
        self
    }
}

/// An ordered set of selections
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectionSet {
    /// Selections in document order
    pub items: Vec<Selection>,
}

impl SelectionSet {
    /// Creates an empty selection set
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a selection
    pub fn with(mut self, selection: impl Into<Selection>) -> Self {
        self.items.push(selection.into());
        self
    }

    /// Returns true if the set has no selections
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// One selection inside a selection set
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    /// Direct field selection
    Field(Field),
    /// Reference to a named fragment
    FragmentSpread(FragmentSpread),
    /// Type-conditional inline fragment
    InlineFragment(InlineFragment),
}

impl From<Field> for Selection {
    fn from(field: Field) -> Self {
        Selection::Field(field)
    }
}

impl From<FragmentSpread> for Selection {
    fn from(spread: FragmentSpread) -> Self {
        Selection::FragmentSpread(spread)
    }
}

impl From<InlineFragment> for Selection {
    fn from(fragment: InlineFragment) -> Self {
        Selection::InlineFragment(fragment)
    }
}

/// A field selection with arguments and an optional nested selection set
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Field name as declared on the enclosing type
    pub name: String,
    /// Arguments in document order
    pub arguments: Vec<Argument>,
    /// Nested selections, absent for leaf fields
    pub selection_set: Option<SelectionSet>,
}

impl Field {
    /// Creates a leaf field selection
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
            selection_set: None,
        }
    }

    /// Appends an argument
    pub fn with_argument(mut self, name: impl Into<String>, value: Value) -> Self {
        self.arguments.push(Argument {
            name: name.into(),
            value,
        });
        self
    }

    /// Appends a nested selection, creating the selection set on first use
    pub fn with_selection(mut self, selection: impl Into<Selection>) -> Self {
        self.selection_set
            .get_or_insert_with(SelectionSet::new)
            .items
            .push(selection.into());
        self
    }
}

/// A named argument on a field selection
#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    /// Argument name
    pub name: String,
    /// Literal or variable value
    pub value: Value,
}

/// A reference to a named fragment
#[derive(Debug, Clone, PartialEq)]
pub struct FragmentSpread {
    /// Name of the referenced fragment definition
    pub name: String,
}

impl FragmentSpread {
    /// Creates a spread referencing the named fragment
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// An inline fragment, optionally restricted to a type condition
#[derive(Debug, Clone, PartialEq)]
pub struct InlineFragment {
    /// Type condition, absent for `... { }` style fragments
    pub type_condition: Option<String>,
    /// Fragment selection set
    pub selection_set: SelectionSet,
}

impl InlineFragment {
    /// Creates an inline fragment conditioned on the named type
    pub fn on(type_condition: impl Into<String>) -> Self {
        Self {
            type_condition: Some(type_condition.into()),
            selection_set: SelectionSet::new(),
        }
    }

    /// Creates an inline fragment without a type condition
    pub fn anonymous() -> Self {
        Self {
            type_condition: None,
            selection_set: SelectionSet::new(),
        }
    }

    /// Appends a selection
    pub fn with_selection(mut self, selection: impl Into<Selection>) -> Self {
        self.selection_set.items.push(selection.into());
        self
    }
}

/// A named fragment definition with a mandatory type condition
#[derive(Debug, Clone, PartialEq)]
pub struct FragmentDefinition {
    /// Fragment name
    pub name: String,
    /// Type the fragment applies to
    pub type_condition: String,
    /// Fragment selection set
    pub selection_set: SelectionSet,
}

impl FragmentDefinition {
    /// Creates a fragment definition on the given type
    pub fn new(name: impl Into<String>, type_condition: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_condition: type_condition.into(),
            selection_set: SelectionSet::new(),
        }
    }

    /// Appends a selection
    pub fn with_selection(mut self, selection: impl Into<Selection>) -> Self {
        self.selection_set.items.push(selection.into());
        self
    }
}
