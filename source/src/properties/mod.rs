mod canonical_combining_class;
mod general_category;

pub use canonical_combining_class::CanonicalCombiningClass;
pub use general_category::GeneralCategory;

#[derive(Debug, PartialEq)]
pub enum PropertiesError
{
    UnknownPropertyValue,
}

impl From<core::num::ParseIntError> for PropertiesError
{
    fn from(_: core::num::ParseIntError) -> Self
    {
        Self::UnknownPropertyValue
    }
}
