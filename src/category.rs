#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Category {
  New,
  Top,
}

impl Category {
  pub(crate) fn endpoint(self) -> &'static str {
    match self {
      Self::New => "newstories",
      Self::Top => "topstories",
    }
  }

  pub(crate) fn label(self) -> &'static str {
    match self {
      Self::New => "New",
      Self::Top => "Top",
    }
  }
}
