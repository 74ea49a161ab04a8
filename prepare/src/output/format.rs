use unicode_blocks::{Aliases, AttributeRecord};

/// строка Typst в кавычках
pub fn typst_string(value: &str) -> String
{
    let mut output = String::with_capacity(value.len() + 2);

    output.push('"');

    for c in value.chars() {
        match c {
            '"' => output.push_str("\\\""),
            '\\' => output.push_str("\\\\"),
            '\n' => output.push_str("\\n"),
            c => output.push(c),
        }
    }

    output.push('"');
    output
}

/// свойства кодпоинта: ("NAME", "Lu", 0), пустая позиция - ()
pub fn typst_record(record: Option<&AttributeRecord>) -> String
{
    match record {
        Some(record) => format!(
            "({}, {}, {})",
            typst_string(&record.name),
            typst_string(&record.general_category),
            record.combining_class
        ),
        None => "()".to_owned(),
    }
}

/// массив строк; массив из одного элемента требует завершающей запятой
pub fn typst_array(items: &[String]) -> String
{
    match items.len() {
        0 => "()".to_owned(),
        1 => format!("({},)", typst_string(&items[0])),
        _ => {
            let items: Vec<String> = items.iter().map(|item| typst_string(item)).collect();
            format!("({})", items.join(", "))
        }
    }
}

/// альтернативные названия: (correction, control, alternate, figment, abbreviation)
pub fn typst_aliases(aliases: &Aliases) -> String
{
    format!(
        "({}, {}, {}, {}, {})",
        typst_array(&aliases.correction),
        typst_array(&aliases.control),
        typst_array(&aliases.alternate),
        typst_array(&aliases.figment),
        typst_array(&aliases.abbreviation),
    )
}
