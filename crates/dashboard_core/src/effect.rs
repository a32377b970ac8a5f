use crate::Location;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Push `location` onto the navigation history and persist it.
    Navigate { location: Location },
}
