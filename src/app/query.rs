//! Query state controller: the filter and pagination fields that drive the
//! next fetch, with the page-reset rules applied by every mutator.

/// Gender filter as selected in the UI. `All` means "do not filter".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GenderFilter {
    #[default]
    All,
    Male,
    Female,
}

impl GenderFilter {
    /// Advance to the next filter value, wrapping around.
    pub fn cycle(self) -> Self {
        match self {
            GenderFilter::All => GenderFilter::Male,
            GenderFilter::Male => GenderFilter::Female,
            GenderFilter::Female => GenderFilter::All,
        }
    }

    /// Query parameter value, or `None` when the filter is at its default.
    pub fn param(self) -> Option<&'static str> {
        match self {
            GenderFilter::All => None,
            GenderFilter::Male => Some("male"),
            GenderFilter::Female => Some("female"),
        }
    }

    pub fn label(self) -> &'static str {
        self.param().unwrap_or("all")
    }
}

/// Status filter as selected in the UI. `All` means "do not filter".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    /// Advance to the next filter value, wrapping around.
    pub fn cycle(self) -> Self {
        match self {
            StatusFilter::All => StatusFilter::Active,
            StatusFilter::Active => StatusFilter::Inactive,
            StatusFilter::Inactive => StatusFilter::All,
        }
    }

    /// Query parameter value, or `None` when the filter is at its default.
    pub fn param(self) -> Option<&'static str> {
        match self {
            StatusFilter::All => None,
            StatusFilter::Active => Some("active"),
            StatusFilter::Inactive => Some("inactive"),
        }
    }

    pub fn label(self) -> &'static str {
        self.param().unwrap_or("all")
    }
}

/// Rows requested per page. The endpoint accepts a fixed set of sizes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PageSize {
    #[default]
    Five,
    Ten,
    Twenty,
}

impl PageSize {
    pub fn get(self) -> u64 {
        match self {
            PageSize::Five => 5,
            PageSize::Ten => 10,
            PageSize::Twenty => 20,
        }
    }

    /// Advance to the next size, wrapping around.
    pub fn cycle(self) -> Self {
        match self {
            PageSize::Five => PageSize::Ten,
            PageSize::Ten => PageSize::Twenty,
            PageSize::Twenty => PageSize::Five,
        }
    }

    pub fn from_value(v: u64) -> Option<Self> {
        match v {
            5 => Some(PageSize::Five),
            10 => Some(PageSize::Ten),
            20 => Some(PageSize::Twenty),
            _ => None,
        }
    }
}

/// The client-owned set of filter and pagination parameters.
///
/// Changing search, gender, status or page size resets the current page to 1;
/// page navigation clamps to `[1, total_pages]`. The struct never talks to
/// the network itself, it only derives the parameters for the next fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryState {
    pub search: String,
    pub gender: GenderFilter,
    pub status: StatusFilter,
    /// Current page, always >= 1.
    pub page: u64,
    pub per_page: PageSize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search: String::new(),
            gender: GenderFilter::All,
            status: StatusFilter::All,
            page: 1,
            per_page: PageSize::default(),
        }
    }
}

impl QueryState {
    pub fn new(per_page: PageSize) -> Self {
        Self {
            per_page,
            ..Self::default()
        }
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
        self.page = 1;
    }

    pub fn set_gender(&mut self, gender: GenderFilter) {
        self.gender = gender;
        self.page = 1;
    }

    pub fn set_status(&mut self, status: StatusFilter) {
        self.status = status;
        self.page = 1;
    }

    pub fn set_page_size(&mut self, per_page: PageSize) {
        self.per_page = per_page;
        self.page = 1;
    }

    pub fn can_prev(&self) -> bool {
        self.page > 1
    }

    pub fn can_next(&self, total_pages: u64) -> bool {
        total_pages > 0 && self.page < total_pages
    }

    /// Move to the next page; no-op on the last page or when the page count
    /// is unknown (zero).
    pub fn next_page(&mut self, total_pages: u64) {
        if self.can_next(total_pages) {
            self.page += 1;
        }
    }

    /// Move to the previous page; no-op on page 1.
    pub fn prev_page(&mut self) {
        if self.can_prev() {
            self.page -= 1;
        }
    }

    /// Pull the current page back into range after the remote page count
    /// shrank below it.
    pub fn clamp_page(&mut self, total_pages: u64) {
        if total_pages > 0 && self.page > total_pages {
            self.page = total_pages;
        }
    }

    /// Clear search and both filters and go back to page 1. Page size is
    /// deliberately left untouched.
    pub fn reset(&mut self) {
        self.search.clear();
        self.gender = GenderFilter::All;
        self.status = StatusFilter::All;
        self.page = 1;
    }

    /// Query parameters for the collection endpoint.
    ///
    /// `page` and `per_page` are always present; `name` only when the trimmed
    /// search text is non-empty; `gender` and `status` only when not "all".
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", self.page.to_string()),
            ("per_page", self.per_page.get().to_string()),
        ];
        let name = self.search.trim();
        if !name.is_empty() {
            params.push(("name", name.to_string()));
        }
        if let Some(g) = self.gender.param() {
            params.push(("gender", g.to_string()));
        }
        if let Some(s) = self.status.param() {
            params.push(("status", s.to_string()));
        }
        params
    }
}
