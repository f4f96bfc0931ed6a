//! Core data model types for arithdrill.
//!
//! These are the types the generators, the orchestrator and the scoring
//! code share: questions, question sets and generation settings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Highest supported number of fractional digits in decimal mode.
pub const MAX_DECIMAL_PLACES: u32 = 2;

/// Largest accepted `max_num`. Keeps every generated product and sum
/// well inside `i64`.
pub const MAX_OPERAND: i64 = 1_000_000;

/// An arithmetic operator as shown on a practice sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// The symbol printed between operands.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "\u{2212}",
            Operator::Multiply => "\u{d7}",
            Operator::Divide => "\u{f7}",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// The kinds of question a sheet can request counts for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Add,
    Subtract,
    Multiply,
    Divide,
    Mixed,
    Bracketed,
    FillBlank,
    Vertical,
}

impl Category {
    /// Every category, in the order a batch is generated.
    pub const ALL: [Category; 8] = [
        Category::Add,
        Category::Subtract,
        Category::Multiply,
        Category::Divide,
        Category::Mixed,
        Category::Bracketed,
        Category::FillBlank,
        Category::Vertical,
    ];

    /// The single operator behind a simple category, `None` for composites.
    pub fn operator(self) -> Option<Operator> {
        match self {
            Category::Add => Some(Operator::Add),
            Category::Subtract => Some(Operator::Subtract),
            Category::Multiply => Some(Operator::Multiply),
            Category::Divide => Some(Operator::Divide),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Add => write!(f, "add"),
            Category::Subtract => write!(f, "subtract"),
            Category::Multiply => write!(f, "multiply"),
            Category::Divide => write!(f, "divide"),
            Category::Mixed => write!(f, "mixed"),
            Category::Bracketed => write!(f, "bracketed"),
            Category::FillBlank => write!(f, "fill-blank"),
            Category::Vertical => write!(f, "vertical"),
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "add" | "addition" => Ok(Category::Add),
            "subtract" | "sub" | "subtraction" => Ok(Category::Subtract),
            "multiply" | "mul" | "multiplication" => Ok(Category::Multiply),
            "divide" | "div" | "division" => Ok(Category::Divide),
            "mixed" => Ok(Category::Mixed),
            "bracketed" | "bracket" => Ok(Category::Bracketed),
            "fill-blank" | "fillblank" => Ok(Category::FillBlank),
            "vertical" => Ok(Category::Vertical),
            other => Err(format!("unknown category: {other}")),
        }
    }
}

/// How a question is laid out when printed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Layout {
    /// A single line of text.
    Inline,
    /// Operands stacked for column arithmetic.
    Vertical {
        top: String,
        operator: Operator,
        bottom: String,
    },
}

/// A single generated problem with its canonical answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Problem text, e.g. `"12 + 7 = "` or `"____ − 4 = 9"`.
    pub text: String,
    /// The expected answer.
    pub answer: f64,
    /// Which category produced this question.
    pub category: Category,
    /// Presentation hint for renderers.
    pub layout: Layout,
}

impl Question {
    pub fn inline(category: Category, text: impl Into<String>, answer: f64) -> Self {
        Self {
            text: text.into(),
            answer,
            category,
            layout: Layout::Inline,
        }
    }
}

/// An ordered batch of questions produced by one generation call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestionSet {
    /// Questions in presentation order.
    pub questions: Vec<Question>,
    /// Precision of decimal-mode answers, `None` for integer sets.
    #[serde(default)]
    pub decimal_places: Option<u32>,
}

impl QuestionSet {
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }
}

impl<'a> IntoIterator for &'a QuestionSet {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}

/// Whether a generated set keeps category order or is shuffled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionOrder {
    /// Generation order, grouped by category.
    Sequential,
    /// Fisher–Yates shuffle of the whole set.
    #[default]
    Random,
}

impl fmt::Display for QuestionOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionOrder::Sequential => write!(f, "sequential"),
            QuestionOrder::Random => write!(f, "random"),
        }
    }
}

impl FromStr for QuestionOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sequential" | "seq" => Ok(QuestionOrder::Sequential),
            "random" | "shuffle" => Ok(QuestionOrder::Random),
            other => Err(format!("unknown question order: {other}")),
        }
    }
}

/// Requested number of questions per category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryCounts {
    pub add: u32,
    pub subtract: u32,
    pub multiply: u32,
    pub divide: u32,
    pub mixed: u32,
    pub bracketed: u32,
    pub fill_blank: u32,
    pub vertical: u32,
}

impl Default for CategoryCounts {
    fn default() -> Self {
        Self {
            add: 3,
            subtract: 3,
            multiply: 2,
            divide: 2,
            mixed: 0,
            bracketed: 0,
            fill_blank: 0,
            vertical: 0,
        }
    }
}

impl CategoryCounts {
    /// All counts set to zero.
    pub fn none() -> Self {
        Self {
            add: 0,
            subtract: 0,
            multiply: 0,
            divide: 0,
            mixed: 0,
            bracketed: 0,
            fill_blank: 0,
            vertical: 0,
        }
    }

    pub fn get(&self, category: Category) -> u32 {
        match category {
            Category::Add => self.add,
            Category::Subtract => self.subtract,
            Category::Multiply => self.multiply,
            Category::Divide => self.divide,
            Category::Mixed => self.mixed,
            Category::Bracketed => self.bracketed,
            Category::FillBlank => self.fill_blank,
            Category::Vertical => self.vertical,
        }
    }

    pub fn set(&mut self, category: Category, count: u32) {
        let slot = match category {
            Category::Add => &mut self.add,
            Category::Subtract => &mut self.subtract,
            Category::Multiply => &mut self.multiply,
            Category::Divide => &mut self.divide,
            Category::Mixed => &mut self.mixed,
            Category::Bracketed => &mut self.bracketed,
            Category::FillBlank => &mut self.fill_blank,
            Category::Vertical => &mut self.vertical,
        };
        *slot = count;
    }

    /// Sum of every category count.
    pub fn total(&self) -> u64 {
        Category::ALL.iter().map(|&c| u64::from(self.get(c))).sum()
    }
}

/// Everything the generators need to build a question set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationSettings {
    /// Smallest operand value.
    #[serde(default = "default_min_num")]
    pub min_num: i64,
    /// Largest operand value.
    #[serde(default = "default_max_num")]
    pub max_num: i64,
    /// Keep subtraction-derived results at or above zero.
    #[serde(default = "default_true")]
    pub no_negative: bool,
    /// Keep integer division exact.
    #[serde(default = "default_true")]
    pub no_remainder: bool,
    /// Use decimal operands for the four simple operators.
    #[serde(default)]
    pub enable_decimal: bool,
    /// Fractional digits in decimal mode.
    #[serde(default = "default_decimal_places")]
    pub decimal_places: u32,
    /// Whether the finished set is shuffled.
    #[serde(default)]
    pub order: QuestionOrder,
    /// Requested questions per category.
    #[serde(default)]
    pub counts: CategoryCounts,
}

fn default_min_num() -> i64 {
    1
}

fn default_max_num() -> i64 {
    20
}

fn default_true() -> bool {
    true
}

fn default_decimal_places() -> u32 {
    1
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            min_num: default_min_num(),
            max_num: default_max_num(),
            no_negative: true,
            no_remainder: true,
            enable_decimal: false,
            decimal_places: default_decimal_places(),
            order: QuestionOrder::default(),
            counts: CategoryCounts::default(),
        }
    }
}

impl GenerationSettings {
    /// Check the invariants generation relies on.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.counts.total() == 0 {
            return Err(ValidationError::NoQuestions);
        }
        if self.min_num >= self.max_num {
            return Err(ValidationError::InvalidRange {
                min: self.min_num,
                max: self.max_num,
            });
        }
        if self.min_num < 0 {
            return Err(ValidationError::NegativeRange { min: self.min_num });
        }
        if self.max_num > MAX_OPERAND {
            return Err(ValidationError::RangeTooLarge {
                max: self.max_num,
                limit: MAX_OPERAND,
            });
        }
        if self.enable_decimal && !(1..=MAX_DECIMAL_PLACES).contains(&self.decimal_places) {
            return Err(ValidationError::DecimalPlaces(self.decimal_places));
        }
        Ok(())
    }

    /// Precision used for answers, `None` in integer mode.
    pub fn precision(&self) -> Option<u32> {
        self.enable_decimal.then_some(self.decimal_places)
    }
}
