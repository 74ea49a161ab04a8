use crate::properties::{CanonicalCombiningClass, GeneralCategory};
use crate::{SourceError, UcdRecord};

/// количество полей в записи UnicodeData.txt
pub const UNICODE_DATA_FIELDS: usize = 15;

/// свойства кодпоинта из UnicodeData.txt, нужные для таблиц блоков
///
/// остальные колонки (bidi класс, декомпозиция, числовые значения, bidi mirrored, устаревшие названия,
/// соответствия регистра) читаются, но не сохраняются
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnicodeDataRecord
{
    /// код символа
    pub code: u32,
    /// строка UnicodeData.txt, для развернутого диапазона - строка его начала
    pub line: usize,
    /// название
    pub name: String,
    /// категория символа (general category) в том виде, в каком она записана в UCD
    pub gc: String,
    /// класс канонического комбинирования (canonical combining class)
    pub ccc: CanonicalCombiningClass,
}

impl TryFrom<&UcdRecord> for UnicodeDataRecord
{
    type Error = SourceError;

    fn try_from(record: &UcdRecord) -> Result<Self, Self::Error>
    {
        record.expect_fields(UNICODE_DATA_FIELDS)?;

        let code = record.codepoint(0)?;

        let gc = record.field(2);

        if gc.len() != 2 || !gc.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(record.malformed(format!("некорректная категория: '{}'", gc)));
        }

        if GeneralCategory::try_from(gc).is_err() {
            tracing::warn!(
                code,
                gc,
                line = record.line,
                "категория не входит в известный набор, записывается как есть"
            );
        }

        let ccc = CanonicalCombiningClass::try_from(record.field(3))
            .map_err(|_| record.malformed(format!("некорректный CCC: '{}'", record.field(3))))?;

        Ok(Self {
            code,
            line: record.line,
            name: record.field(1).to_owned(),
            gc: gc.to_owned(),
            ccc,
        })
    }
}

impl UnicodeDataRecord
{
    /// категория из известного набора; None - категория, появившаяся в более новой версии UCD
    pub fn category(&self) -> Option<GeneralCategory>
    {
        GeneralCategory::try_from(self.gc.as_str()).ok()
    }
}

/// разбор записей UnicodeData.txt
///
/// диапазоны (<CJK Ideograph, First> .. <CJK Ideograph, Last>) по умолчанию остаются двумя обычными
/// записями. при expand_ranges = true диапазон разворачивается в записи для каждого кодпоинта
/// с названиями вида "CJK Ideograph-4E00"
pub fn unicode_data(records: &[UcdRecord], expand_ranges: bool)
    -> Result<Vec<UnicodeDataRecord>, SourceError>
{
    let mut result = Vec::with_capacity(records.len());

    // начало диапазона, ожидающее пары
    let mut range_start: Option<(&UcdRecord, UnicodeDataRecord)> = None;

    for record in records {
        let codepoint = UnicodeDataRecord::try_from(record)?;

        if !expand_ranges {
            result.push(codepoint);
            continue;
        }

        if let Some(group) = range_group(&codepoint.name, "First>") {
            if range_start.is_some() {
                return Err(record.malformed(format!("диапазон {} начинается внутри другого", group)));
            }

            range_start = Some((record, codepoint));
            continue;
        }

        if let Some(group) = range_group(&codepoint.name, "Last>") {
            let (start_record, start) = match range_start.take() {
                Some(start) => start,
                None => return Err(record.malformed(format!("конец диапазона {} без начала", group))),
            };

            if range_group(&start.name, "First>") != Some(group) || start.code > codepoint.code {
                return Err(start_record.malformed(format!("диапазон {} не закрыт", group)));
            }

            tracing::debug!(
                group,
                first = start.code,
                last = codepoint.code,
                "разворачиваем диапазон"
            );

            for code in start.code ..= codepoint.code {
                result.push(UnicodeDataRecord {
                    code,
                    line: start.line,
                    name: format!("{}-{:04X}", group, code),
                    gc: start.gc.clone(),
                    ccc: start.ccc,
                });
            }

            continue;
        }

        if let Some((start_record, start)) = &range_start {
            return Err(start_record.malformed(format!("диапазон {} не закрыт", start.name)));
        }

        result.push(codepoint);
    }

    if let Some((start_record, start)) = range_start {
        return Err(start_record.malformed(format!("диапазон {} не закрыт", start.name)));
    }

    Ok(result)
}

/// название группы, если кодпоинт - граница диапазона: "<Hangul Syllable, First>" -> "Hangul Syllable"
fn range_group<'a>(name: &'a str, suffix: &str) -> Option<&'a str>
{
    name.strip_prefix('<')?
        .strip_suffix(suffix)?
        .strip_suffix(", ")
}
