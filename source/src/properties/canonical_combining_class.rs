use super::PropertiesError;

/// класс канонического комбинирования (Canonical Combining Class, CCC)
/// берется из UCD: четвертая колонка UnicodeData.txt
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct CanonicalCombiningClass(u8);

impl From<u8> for CanonicalCombiningClass
{
    #[inline]
    fn from(value: u8) -> Self
    {
        Self(value)
    }
}

impl From<CanonicalCombiningClass> for u8
{
    #[inline]
    fn from(value: CanonicalCombiningClass) -> Self
    {
        value.0
    }
}

impl TryFrom<&str> for CanonicalCombiningClass
{
    type Error = PropertiesError;

    fn try_from(value: &str) -> Result<Self, Self::Error>
    {
        Ok(Self::from(value.parse::<u8>()?))
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn parse_ccc()
    {
        assert_eq!(CanonicalCombiningClass::try_from("230").map(u8::from), Ok(230));
        assert_eq!(CanonicalCombiningClass::try_from("0").map(u8::from), Ok(0));
        assert!(CanonicalCombiningClass::try_from("256").is_err());
        assert!(CanonicalCombiningClass::try_from("-1").is_err());
        assert!(CanonicalCombiningClass::try_from("").is_err());
    }
}
