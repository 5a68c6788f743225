//! Row model for generated input-output tables.

/// `relation` value marking a labor row.
pub const LABOR_RELATION: u64 = 0;

/// `relation` value marking an aggregate output row.
pub const OUTPUT_RELATION: u64 = 1;

/// One line of the table: a `(subject, relation, quantity)` triple.
///
/// The `relation` field is overloaded. `0` means the row states the labor
/// requirement of `subject`; `1` means it states the aggregate output
/// quantity of `subject`; any other value is the UPC of a product consumed
/// by `subject`, making the row a recipe edge. UPCs never collide with the
/// two marker values because they are drawn from a 12-digit range.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Row {
    pub subject: u64,
    pub relation: u64,
    pub quantity: u64,
}

/// Classification of a [`Row`] by its `relation` field.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RowKind {
    Labor,
    Output,
    Edge,
}

impl Row {
    /// Labor requirement row for `subject`.
    pub fn labor(subject: u64, quantity: u64) -> Self {
        Self {
            subject,
            relation: LABOR_RELATION,
            quantity,
        }
    }

    /// Recipe edge: producing `subject` consumes `quantity` of `input`.
    pub fn edge(subject: u64, input: u64, quantity: u64) -> Self {
        Self {
            subject,
            relation: input,
            quantity,
        }
    }

    /// Aggregate output row for `subject`.
    pub fn output(subject: u64, quantity: u64) -> Self {
        Self {
            subject,
            relation: OUTPUT_RELATION,
            quantity,
        }
    }

    pub fn kind(&self) -> RowKind {
        match self.relation {
            LABOR_RELATION => RowKind::Labor,
            OUTPUT_RELATION => RowKind::Output,
            _ => RowKind::Edge,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Row, RowKind};

    #[test]
    fn kind_follows_relation() {
        assert_eq!(Row::labor(7, 100).kind(), RowKind::Labor);
        assert_eq!(Row::output(7, 100).kind(), RowKind::Output);
        assert_eq!(Row::edge(7, 123_456_789_012, 100).kind(), RowKind::Edge);
    }
}
