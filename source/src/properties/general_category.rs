use super::PropertiesError;

/// основная категория символа (General Category, GC)
/// берется из UCD: третья колонка UnicodeData.txt
///
/// общие категории:
///     L (Lu, Ll, Lt, Lm, Lo) - буквы
///     M (Mn, Mc, Me) - комбинирующие символы
///     N (Nd, Nl, No) - цифры, числовые символы
///     P (Pc, Pd, Ps, Pe, Pi, Pf, Po) - знаки препинания
///     S (Sm, Sc, Sk, So) - различные символы (математические, валюты и т.д.)
///     Z (Zs, Zl, Zp) - разделители
///     C (Cc, Cf, Cs, Co, Cn) - системные символы
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[repr(u8)]
pub enum GeneralCategory
{
    /// Cn - место под символ зарезервировано или не назначено
    Unassigned,

    /// Lu - прописная буква
    UppercaseLetter,
    /// Ll - строчная буква
    LowercaseLetter,
    /// Lt - диграфический символ, первая часть - заглавная буква
    TitlecaseLetter,
    /// Lm - буква-модификатор
    ModifierLetter,
    /// Lo - прочие буквы, включая слоги и иероглифы
    OtherLetter,

    /// Mn - неразрывный комбинирующий маркер (не занимающий пространства)
    NonspacingMark,
    /// Mc - комбинирующий маркер, занимающий пространство
    SpacingMark,
    /// Me - охватывающий комбинирующий маркер
    EnclosingMark,

    /// Nd - десятичная цифра
    DecimalNumber,
    /// Nl - буквоподобный числовой символ
    LetterNumber,
    /// No - прочие числовые символы
    OtherNumber,

    /// Zs - разделитель-пробел
    SpaceSeparator,
    /// Zl - разделитель строки
    LineSeparator,
    /// Zp - разделитель параграфов
    ParagraphSeparator,

    /// Cc - управляющий символ, относится к C0 или C1
    Control,
    /// Cf - управляющий символ форматирования
    Format,
    /// Cs - символ-суррогат
    Surrogate,
    /// Co - символ для приватного использования
    PrivateUse,

    /// Pc - объединяющяя пунктуация, например _
    ConnectorPunctuation,
    /// Pd - тире или дефис как знак препинания
    DashPunctuation,
    /// Ps - открывающий знак пунктуации (из пары)
    OpenPunctuation,
    /// Pe - закрывающий знак пунктуации (из пары)
    ClosePunctuation,
    /// Pi - начальный знак цитаты
    InitialPunctuation,
    /// Pf - конечный знак цитаты
    FinalPunctuation,
    /// Po - знак препинания другого типа
    OtherPunctuation,

    /// Sm - математический символ
    MathSymbol,
    /// Sc - символ валюты
    CurrencySymbol,
    /// Sk - символ модификатора, не похожий на букву
    ModifierSymbol,
    /// So - прочие символы
    OtherSymbol,
}

/// обозначения категорий в том виде, в каком они записаны в UCD
const ABBREVIATIONS: [(&str, GeneralCategory); 30] = [
    ("Cn", GeneralCategory::Unassigned),
    ("Lu", GeneralCategory::UppercaseLetter),
    ("Ll", GeneralCategory::LowercaseLetter),
    ("Lt", GeneralCategory::TitlecaseLetter),
    ("Lm", GeneralCategory::ModifierLetter),
    ("Lo", GeneralCategory::OtherLetter),
    ("Mn", GeneralCategory::NonspacingMark),
    ("Mc", GeneralCategory::SpacingMark),
    ("Me", GeneralCategory::EnclosingMark),
    ("Nd", GeneralCategory::DecimalNumber),
    ("Nl", GeneralCategory::LetterNumber),
    ("No", GeneralCategory::OtherNumber),
    ("Zs", GeneralCategory::SpaceSeparator),
    ("Zl", GeneralCategory::LineSeparator),
    ("Zp", GeneralCategory::ParagraphSeparator),
    ("Cc", GeneralCategory::Control),
    ("Cf", GeneralCategory::Format),
    ("Cs", GeneralCategory::Surrogate),
    ("Co", GeneralCategory::PrivateUse),
    ("Pc", GeneralCategory::ConnectorPunctuation),
    ("Pd", GeneralCategory::DashPunctuation),
    ("Ps", GeneralCategory::OpenPunctuation),
    ("Pe", GeneralCategory::ClosePunctuation),
    ("Pi", GeneralCategory::InitialPunctuation),
    ("Pf", GeneralCategory::FinalPunctuation),
    ("Po", GeneralCategory::OtherPunctuation),
    ("Sm", GeneralCategory::MathSymbol),
    ("Sc", GeneralCategory::CurrencySymbol),
    ("Sk", GeneralCategory::ModifierSymbol),
    ("So", GeneralCategory::OtherSymbol),
];

impl GeneralCategory
{
    /// двухбуквенное обозначение категории
    pub fn abbr(&self) -> &'static str
    {
        ABBREVIATIONS[*self as usize].0
    }
}

impl TryFrom<&str> for GeneralCategory
{
    type Error = PropertiesError;

    #[inline]
    fn try_from(abbr: &str) -> Result<Self, Self::Error>
    {
        ABBREVIATIONS
            .iter()
            .find(|(value, _)| *value == abbr)
            .map(|(_, gc)| *gc)
            .ok_or(PropertiesError::UnknownPropertyValue)
    }
}
