/// основная категория символа (General Category, GC)
/// берется из UCD: третья колонка UnicodeData.txt
/// всего 30 вариантов, что укладывается в 5 бит
/// варианты отсортированы таким образом, чтобы было проще применять побитовые операции для получения общей категории
///
/// общие категории:
///     LC (Lu, Ll, Lt) - буквы, имеющие регистр
///     L (Lu, Ll, Lt, Lm, Lo) - буквы
///     M (Mn, Mc, Me) - комбинирующие символы
///     N (Nd, Nl, No) - цифры, числовые символы
///     P (Pc, Pd, Ps, Pe, Pi, Pf, Po) - знаки препинания
///     S (Sm, Sc, Sk, So) - различные символы (математические, валюты и т.д.)
///     Z (Zs, Zl, Zp) - разделители
///     C (Cc, Cf, Cs, Co, Cn) - системные символы
///
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[repr(u8)]
pub enum GeneralCategory
{
    /// Cn - место под символ зарезервировано или не назначено, или же элемент не является символом.
    /// заполняет промежутки между записями UCD
    Unassigned = 0, // 0b_0000_0000

    /// Lu - прописная буква
    UppercaseLetter = 1, // 0b_0000_0001
    /// Ll - строчная буква
    LowercaseLetter = 2, // 0b_0000_0010
    /// Lt - диграфический символ, первая часть - заглавная буква
    TitlecaseLetter = 3, // 0b_0000_0011

    /// Lm - буква-модификатор
    ModifierLetter = 4, // 0b_0000_0100
    /// Lo - прочие буквы, включая слоги и иероглифы
    OtherLetter = 5, // 0b_0000_0101

    /// Mn - неразрывный комбинирующий маркер (не занимающий пространства)
    NonspacingMark = 6, // 0b_0000_0110
    /// Mc - комбинирующий маркер, занимающий пространство
    SpacingMark = 7, // 0b_0000_0111
    /// Me - охватывающий комбинирующий маркер
    EnclosingMark = 8, // 0b_0000_1000

    /// Nd - десятичная цифра
    DecimalNumber = 9, // 0b_0000_1001
    /// Nl - буквоподобный числовой символ
    LetterNumber = 10, // 0b_0000_1010
    /// No - прочие числовые символы
    OtherNumber = 11, // 0b_0000_1011

    /// Zs - разделитель-пробел
    SpaceSeparator = 12, // 0b_0000_1100
    /// Zl - разделитель строки
    LineSeparator = 13, // 0b_0000_1101
    /// Zp - разделитель параграфов
    ParagraphSeparator = 14, // 0b_0000_1110

    /// Cc - управляющий символ, относится к C0 или C1
    Control = 16, // 0b_0001_0000
    /// Cf - управляющий символ форматирования
    Format = 17, // 0b_0001_0001
    /// Cs - символ-суррогат
    Surrogate = 18, // 0b_0001_0010
    /// Co - символ для приватного использования
    PrivateUse = 19, // 0b_0001_0011

    /// Pc - объединяющяя пунктуация, например _
    ConnectorPunctuation = 20, // 0b_0001_0100
    /// Pd - тире или дефис как знак препинания
    DashPunctuation = 21, // 0b_0001_0101
    /// Ps - открывающий знак пунктуации (из пары)
    OpenPunctuation = 22, // 0b_0001_0110
    /// Pe - закрывающий знак пунктуации (из пары)
    ClosePunctuation = 23, // 0b_0001_0111
    /// Pi - начальный знак цитаты
    InitialPunctuation = 24, // 0b_0001_1000
    /// Pf - конечный знак цитаты
    FinalPunctuation = 25, // 0b_0001_1001
    /// Po - знак препинания другого типа
    OtherPunctuation = 26, // 0b_0001_1010

    /// Sm - математический символ
    MathSymbol = 28, // 0b_0001_1100
    /// Sc - символ валюты
    CurrencySymbol = 29, // 0b_0001_1101
    /// Sk - символ модификатора, не похожий на букву
    ModifierSymbol = 30, // 0b_0001_1110
    /// So - прочие символы
    OtherSymbol = 31, // 0b_0001_1111
}

/// сокращения категорий в том же порядке, что и варианты перечисления
const ABBREVIATIONS: [(GeneralCategory, &str); 30] = [
    (GeneralCategory::Unassigned, "Cn"),
    (GeneralCategory::UppercaseLetter, "Lu"),
    (GeneralCategory::LowercaseLetter, "Ll"),
    (GeneralCategory::TitlecaseLetter, "Lt"),
    (GeneralCategory::ModifierLetter, "Lm"),
    (GeneralCategory::OtherLetter, "Lo"),
    (GeneralCategory::NonspacingMark, "Mn"),
    (GeneralCategory::SpacingMark, "Mc"),
    (GeneralCategory::EnclosingMark, "Me"),
    (GeneralCategory::DecimalNumber, "Nd"),
    (GeneralCategory::LetterNumber, "Nl"),
    (GeneralCategory::OtherNumber, "No"),
    (GeneralCategory::SpaceSeparator, "Zs"),
    (GeneralCategory::LineSeparator, "Zl"),
    (GeneralCategory::ParagraphSeparator, "Zp"),
    (GeneralCategory::Control, "Cc"),
    (GeneralCategory::Format, "Cf"),
    (GeneralCategory::Surrogate, "Cs"),
    (GeneralCategory::PrivateUse, "Co"),
    (GeneralCategory::ConnectorPunctuation, "Pc"),
    (GeneralCategory::DashPunctuation, "Pd"),
    (GeneralCategory::OpenPunctuation, "Ps"),
    (GeneralCategory::ClosePunctuation, "Pe"),
    (GeneralCategory::InitialPunctuation, "Pi"),
    (GeneralCategory::FinalPunctuation, "Pf"),
    (GeneralCategory::OtherPunctuation, "Po"),
    (GeneralCategory::MathSymbol, "Sm"),
    (GeneralCategory::CurrencySymbol, "Sc"),
    (GeneralCategory::ModifierSymbol, "Sk"),
    (GeneralCategory::OtherSymbol, "So"),
];

impl GeneralCategory
{
    /// все категории
    pub fn all() -> impl Iterator<Item = GeneralCategory>
    {
        ABBREVIATIONS.iter().map(|(category, _)| *category)
    }

    /// двухбуквенное сокращение из UCD
    pub fn abbr(&self) -> &'static str
    {
        ABBREVIATIONS
            .iter()
            .find_map(|(category, abbr)| match category == self {
                true => Some(*abbr),
                false => None,
            })
            .unwrap_or("Cn")
    }

    /// относится-ли категория к буквам с регистром (LC)
    #[inline]
    pub fn is_cased_letter(&self) -> bool
    {
        !self.is_unassigned() && u8::from(*self) < 4
    }

    /// относится-ли категория к буквам (L)
    #[inline]
    pub fn is_letter(&self) -> bool
    {
        !self.is_unassigned() && u8::from(*self) < 6
    }

    /// относится-ли категория к комбинирующим символам (M)
    #[inline]
    pub fn is_combining_mark(&self) -> bool
    {
        let value = u8::from(*self);

        value & 0b_1111_1110 == 0b_0000_0110 || value == 0b_0000_1000
    }

    /// относится-ли категория к цифрам и числовым символам (N)
    #[inline]
    pub fn is_numeric(&self) -> bool
    {
        let value = u8::from(*self);

        value & 0b_1111_1100 == 0b_0000_1000 && value != 0b_0000_1000
    }

    /// относится-ли категория к разделителям (Z)
    #[inline]
    pub fn is_separator(&self) -> bool
    {
        u8::from(*self) & 0b_1111_1100 == 0b_0000_1100
    }

    /// относится-ли категория к управляющим символам (или не назначена) (C)
    #[inline]
    pub fn is_control(&self) -> bool
    {
        self.is_unassigned() || u8::from(*self) & 0b_1111_1100 == 0b_0001_0000
    }

    /// категория не назначена (Cn)
    #[inline]
    pub fn is_unassigned(&self) -> bool
    {
        u8::from(*self) == 0
    }

    /// относится-ли категория к пунктуации (P)
    #[inline]
    pub fn is_punctuation(&self) -> bool
    {
        let masked = u8::from(*self) & 0b_1111_1100;

        masked == 0b_0001_0100 || masked == 0b_0001_1000
    }

    /// относится-ли категория к символам (S)
    #[inline]
    pub fn is_symbol(&self) -> bool
    {
        u8::from(*self) & 0b_1111_1100 == 0b_0001_1100
    }
}

/// сокращение категории не найдено
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct UnknownGeneralCategory(pub String);

impl core::fmt::Display for UnknownGeneralCategory
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result
    {
        write!(f, "неизвестная категория: {:?}", self.0)
    }
}

impl std::error::Error for UnknownGeneralCategory {}

impl TryFrom<&str> for GeneralCategory
{
    type Error = UnknownGeneralCategory;

    #[inline]
    fn try_from(abbr: &str) -> Result<Self, Self::Error>
    {
        ABBREVIATIONS
            .iter()
            .find_map(|(category, value)| match *value == abbr {
                true => Some(*category),
                false => None,
            })
            .ok_or_else(|| UnknownGeneralCategory(abbr.to_owned()))
    }
}

impl TryFrom<u8> for GeneralCategory
{
    type Error = UnknownGeneralCategory;

    #[inline]
    fn try_from(value: u8) -> Result<Self, Self::Error>
    {
        Self::all()
            .find(|category| u8::from(*category) == value)
            .ok_or_else(|| UnknownGeneralCategory(format!("0x{:02X}", value)))
    }
}

impl From<GeneralCategory> for u8
{
    #[inline]
    fn from(value: GeneralCategory) -> Self
    {
        value as u8
    }
}

impl core::fmt::Display for GeneralCategory
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result
    {
        write!(f, "{}", self.abbr())
    }
}
