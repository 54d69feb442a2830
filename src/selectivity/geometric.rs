use strum_macros::{Display, EnumIter, EnumMessage, EnumString, IntoStaticStr};

/// Geometric operator families without a statistics model.
///
/// Their selectivities are fixed constants.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, IntoStaticStr, EnumMessage,
)]
#[strum(serialize_all = "kebab-case")]
pub enum GeometricOperator {
    #[strum(
        message = "Area",
        detailed_message = "Operators that depend on area, such as overlap."
    )]
    Area,
    #[strum(
        message = "Position",
        detailed_message = "Strictly left of, right of, above or below."
    )]
    Position,
    #[strum(
        message = "Containment",
        detailed_message = "Contains or is contained by. Tighter than overlap."
    )]
    Containment,
}

impl GeometricOperator {
    /// Selectivity of `column OP constant`.
    pub fn restriction_selectivity(self) -> f64 {
        match self {
            GeometricOperator::Area => 0.005,
            GeometricOperator::Position => 0.1,
            GeometricOperator::Containment => 0.001,
        }
    }

    /// Selectivity of `a.column OP b.column`.
    pub fn join_selectivity(self) -> f64 {
        match self {
            GeometricOperator::Area => 0.005,
            GeometricOperator::Position => 0.1,
            GeometricOperator::Containment => 0.001,
        }
    }
}
