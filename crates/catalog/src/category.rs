use strum::Display;

#[derive(Display, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum Category {
    Produce,
    Alcohol,
    Frozen,
}
