//! This modules defines the common functionality for paging and sorting lists of cash cards.

use std::str::FromStr;

use crate::Error;

/// The config for pagination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationConfig {
    /// The number of cash cards per page when not specified in a request.
    pub default_page_size: u64,
    /// Requested page sizes larger than this are clamped to this value.
    pub max_page_size: u64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: 20,
            max_page_size: 2000,
        }
    }
}

impl PaginationConfig {
    /// Build a [PageRequest] from the raw `page`, `size` and `sort` query parameters.
    ///
    /// Bad paging values never cause an error. A missing, negative or
    /// unparsable page means the first page (zero). A missing, unparsable or
    /// non-positive size uses [PaginationConfig::default_page_size], and sizes
    /// over [PaginationConfig::max_page_size] are clamped. When no sort is
    /// given, cash cards are sorted by amount in ascending order.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidSortProperty] if a sort parameter names an unknown property.
    pub fn page_request(
        &self,
        page: Option<&str>,
        size: Option<&str>,
        sort: &[String],
    ) -> Result<PageRequest, Error> {
        let page = parse_integer(page).map_or(0, |page| page.max(0).unsigned_abs());

        let size = match parse_integer(size) {
            Some(size) if size > 0 => size.unsigned_abs().min(self.max_page_size),
            _ => self.default_page_size,
        };

        let mut orders = Vec::new();
        for param in sort {
            orders.extend(parse_sort_param(param)?);
        }

        if orders.is_empty() {
            orders.push(SortOrder::default());
        }

        Ok(PageRequest {
            page,
            size,
            sort: orders,
        })
    }
}

fn parse_integer(value: Option<&str>) -> Option<i64> {
    value.and_then(|value| value.trim().parse().ok())
}

/// A request for one page of an owner's cash cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// The zero-based page index.
    pub page: u64,
    /// The maximum number of cash cards on the page.
    pub size: u64,
    /// The orders to sort by, most significant first.
    pub sort: Vec<SortOrder>,
}

impl PageRequest {
    /// The number of cash cards to skip before the first card on this page.
    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: PaginationConfig::default().default_page_size,
            sort: vec![SortOrder::default()],
        }
    }
}

/// A cash card property that lists can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortProperty {
    /// The cash card ID.
    Id,
    /// The cash card amount.
    Amount,
    /// The username of the owner.
    Owner,
}

impl SortProperty {
    /// The name of the database column holding the property.
    pub fn column(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Amount => "amount",
            Self::Owner => "owner",
        }
    }
}

impl FromStr for SortProperty {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(Self::Id),
            "amount" => Ok(Self::Amount),
            "owner" => Ok(Self::Owner),
            other => Err(Error::InvalidSortProperty(other.to_owned())),
        }
    }
}

/// The direction to sort in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Sort in order of increasing value.
    #[default]
    Ascending,
    /// Sort in order of decreasing value.
    Descending,
}

impl SortDirection {
    fn parse(token: &str) -> Option<Self> {
        if token.eq_ignore_ascii_case("asc") {
            Some(Self::Ascending)
        } else if token.eq_ignore_ascii_case("desc") {
            Some(Self::Descending)
        } else {
            None
        }
    }

    /// The SQL keyword for the direction.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Ascending => "ASC",
            Self::Descending => "DESC",
        }
    }
}

/// Sort by `property` in the order `direction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    /// The property to sort by.
    pub property: SortProperty,
    /// The direction to sort in.
    pub direction: SortDirection,
}

impl SortOrder {
    /// Sort by `property` in ascending order.
    pub fn asc(property: SortProperty) -> Self {
        Self {
            property,
            direction: SortDirection::Ascending,
        }
    }

    /// Sort by `property` in descending order.
    pub fn desc(property: SortProperty) -> Self {
        Self {
            property,
            direction: SortDirection::Descending,
        }
    }
}

impl Default for SortOrder {
    fn default() -> Self {
        Self::asc(SortProperty::Amount)
    }
}

/// Parse a sort parameter of the form `property[,property...][,asc|desc]`.
///
/// The direction applies to every property in the parameter. A parameter with
/// no properties, e.g. an empty string, yields no orders.
fn parse_sort_param(param: &str) -> Result<Vec<SortOrder>, Error> {
    let mut tokens: Vec<&str> = param
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect();

    let direction = match tokens.last().and_then(|token| SortDirection::parse(token)) {
        Some(direction) => {
            tokens.pop();
            direction
        }
        None => SortDirection::Ascending,
    };

    tokens
        .into_iter()
        .map(|token| {
            token.parse().map(|property| SortOrder {
                property,
                direction,
            })
        })
        .collect()
}
