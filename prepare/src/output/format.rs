use std::fmt::UpperHex;

use unicode_tables::GeneralCategory;

/// значение свойства в виде выражения Rust
pub trait EmitValue: Copy
{
    /// тип значения, указывается в записанной таблице: TableData::<TYPE> { .. }
    const TYPE: &'static str;

    fn literal(&self) -> String;
}

impl EmitValue for GeneralCategory
{
    const TYPE: &'static str = "GeneralCategory";

    fn literal(&self) -> String
    {
        format!("GeneralCategory::{:?}", self)
    }
}

impl EmitValue for u8
{
    const TYPE: &'static str = "u8";

    fn literal(&self) -> String
    {
        self.to_string()
    }
}

impl EmitValue for i32
{
    const TYPE: &'static str = "i32";

    fn literal(&self) -> String
    {
        self.to_string()
    }
}

impl EmitValue for bool
{
    const TYPE: &'static str = "bool";

    fn literal(&self) -> String
    {
        self.to_string()
    }
}

/// представить массив интервалов в текстовом виде, не длиннее boundary символов в строке
pub fn format_ranges<B, V>(input: &[(B, B, V)], boundary: usize) -> String
where
    B: UpperHex + Copy,
    V: EmitValue,
{
    let mut output = String::new();

    let mut cur_len = boundary;

    for (low, high, value) in input {
        let e_str = format!("(0x{:04X}, 0x{:04X}, {}), ", low, high, value.literal());

        match cur_len + e_str.len() > boundary {
            true => {
                output.push_str("\n    ");
                cur_len = 4 + e_str.len();
            }
            false => {
                cur_len += e_str.len();
            }
        };

        output.push_str(e_str.as_str());
    }
    output.push('\n');

    output
}
