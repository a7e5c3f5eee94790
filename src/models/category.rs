use crate::errors::ServiceError;
use std::str::FromStr;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// Top-level taxonomy of the shop.
///
/// Tokens are the lowercase navigation ids; `small-animal` is accepted as an
/// alias of `small`.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, EnumString, EnumIter, AsRefStr, IntoStaticStr, Display,
)]
#[strum(serialize_all = "lowercase")]
pub enum AnimalCategory {
    Dog,
    Cat,
    #[strum(to_string = "small", serialize = "small-animal")]
    Small,
}

/// Product categories shared by dogs and cats.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, EnumString, EnumIter, AsRefStr, IntoStaticStr, Display,
)]
#[strum(serialize_all = "lowercase")]
pub enum ProductCategory {
    Food,
    Snack,
    Clean,
    Tableware,
    House,
    Cloth,
}

/// Product categories of the small-animal section.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, EnumString, EnumIter, AsRefStr, IntoStaticStr, Display,
)]
#[strum(serialize_all = "lowercase")]
pub enum SmallAnimalCategory {
    Food,
    Equipment,
    House,
}

/// A product category as seen from one animal section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategoryInfo {
    pub code: i32,
    pub token: &'static str,
    pub label: &'static str,
}

impl AnimalCategory {
    pub fn parse(token: &str) -> Result<Self, ServiceError> {
        Self::from_str(token.trim())
            .map_err(|_| ServiceError::InvalidCategory(format!("unknown animal '{}'", token)))
    }

    pub fn code(self) -> i32 {
        match self {
            Self::Dog => 1,
            Self::Cat => 2,
            Self::Small => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Dog => "강아지",
            Self::Cat => "고양이",
            Self::Small => "소동물",
        }
    }

    /// Every product category of this section, in code order.
    pub fn product_categories(self) -> Vec<CategoryInfo> {
        match self {
            Self::Dog | Self::Cat => ProductCategory::iter().map(ProductCategory::info).collect(),
            Self::Small => SmallAnimalCategory::iter()
                .map(SmallAnimalCategory::info)
                .collect(),
        }
    }

    pub fn product_category_codes(self) -> Vec<i32> {
        self.product_categories()
            .into_iter()
            .map(|info| info.code)
            .collect()
    }

    /// Display label of a product category code within this section.
    pub fn category_label(self, code: i32) -> Option<&'static str> {
        self.product_categories()
            .into_iter()
            .find(|info| info.code == code)
            .map(|info| info.label)
    }

    /// Resolves a product-category token in the code space of this section.
    pub fn product_category_code(self, token: &str) -> Result<i32, ServiceError> {
        let token = token.trim();
        let code = match self {
            Self::Dog | Self::Cat => ProductCategory::from_str(token).map(ProductCategory::code),
            Self::Small => SmallAnimalCategory::from_str(token).map(SmallAnimalCategory::code),
        };

        code.map_err(|_| {
            ServiceError::InvalidCategory(format!(
                "unknown product category '{}' for animal '{}'",
                token, self
            ))
        })
    }
}

impl ProductCategory {
    pub fn code(self) -> i32 {
        match self {
            Self::Food => 1,
            Self::Snack => 2,
            Self::Clean => 3,
            Self::Tableware => 4,
            Self::House => 5,
            Self::Cloth => 6,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Food => "사료",
            Self::Snack => "간식",
            Self::Clean => "위생",
            Self::Tableware => "급식기/급수기",
            Self::House => "집/울타리",
            Self::Cloth => "의류/악세사리",
        }
    }

    fn info(self) -> CategoryInfo {
        CategoryInfo {
            code: self.code(),
            token: self.into(),
            label: self.label(),
        }
    }
}

impl SmallAnimalCategory {
    pub fn code(self) -> i32 {
        match self {
            Self::Food => 1,
            Self::Equipment => 2,
            Self::House => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Food => "사료",
            Self::Equipment => "기구",
            Self::House => "집/울타리",
        }
    }

    fn info(self) -> CategoryInfo {
        CategoryInfo {
            code: self.code(),
            token: self.into(),
            label: self.label(),
        }
    }
}

/// Resolved `(animal, product category)` pair used to filter listings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategoryFilter {
    pub animal: AnimalCategory,
    pub product_category: i32,
}

impl CategoryFilter {
    pub fn parse(animal_token: &str, product_token: &str) -> Result<Self, ServiceError> {
        let animal = AnimalCategory::parse(animal_token)?;
        let product_category = animal.product_category_code(product_token)?;
        Ok(Self {
            animal,
            product_category,
        })
    }

    pub fn animal_code(&self) -> i32 {
        self.animal.code()
    }
}

/// Ordering of product listings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, EnumString, AsRefStr, Display)]
#[strum(serialize_all = "lowercase")]
pub enum SortBy {
    /// `price` ascending
    #[default]
    Price,
    /// `wish_count` descending
    Popularity,
    /// `created_at` descending
    Newest,
}

impl SortBy {
    /// Absent or blank tokens fall back to price order.
    pub fn parse(token: Option<&str>) -> Result<Self, ServiceError> {
        match token.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(t) => Self::from_str(t)
                .map_err(|_| ServiceError::InvalidCategory(format!("unknown sort_by '{}'", t))),
        }
    }
}

pub const FIRST_PAGE_SIZE: u64 = 32;
pub const PAGE_SIZE: u64 = 12;

/// One-based listing page. The first page is larger than the rest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Page(u32);

impl Page {
    pub fn new(number: u32) -> Result<Self, ServiceError> {
        if number == 0 {
            return Err(ServiceError::ValidationError(
                "page must be at least 1".to_string(),
            ));
        }
        Ok(Self(number))
    }

    pub fn number(&self) -> u32 {
        self.0
    }

    pub fn offset(&self) -> u64 {
        match self.0 {
            1 => 0,
            n => FIRST_PAGE_SIZE + PAGE_SIZE * u64::from(n - 2),
        }
    }

    pub fn limit(&self) -> u64 {
        if self.0 == 1 {
            FIRST_PAGE_SIZE
        } else {
            PAGE_SIZE
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("dog", AnimalCategory::Dog, 1)]
    #[case("cat", AnimalCategory::Cat, 2)]
    #[case("small", AnimalCategory::Small, 3)]
    #[case("small-animal", AnimalCategory::Small, 3)]
    #[case(" dog ", AnimalCategory::Dog, 1)]
    fn animal_tokens_resolve(#[case] token: &str, #[case] animal: AnimalCategory, #[case] code: i32) {
        let parsed = AnimalCategory::parse(token).unwrap();
        assert_eq!(parsed, animal);
        assert_eq!(parsed.code(), code);
    }

    #[rstest]
    #[case("dog", "food", 1)]
    #[case("dog", "cloth", 6)]
    #[case("cat", "tableware", 4)]
    #[case("small", "food", 1)]
    #[case("small", "equipment", 2)]
    #[case("small", "house", 3)]
    fn filters_resolve_in_the_animal_code_space(
        #[case] animal: &str,
        #[case] product: &str,
        #[case] code: i32,
    ) {
        let filter = CategoryFilter::parse(animal, product).unwrap();
        assert_eq!(filter.product_category, code);
    }

    #[rstest]
    #[case("bird", "food")]
    #[case("dog", "equipment")]
    #[case("small", "snack")]
    #[case("cat", "")]
    #[case("DOG", "food")]
    fn unknown_or_mismatched_tokens_are_rejected(#[case] animal: &str, #[case] product: &str) {
        assert_matches!(
            CategoryFilter::parse(animal, product),
            Err(ServiceError::InvalidCategory(_))
        );
    }

    #[test]
    fn house_differs_between_sections() {
        assert_eq!(AnimalCategory::Dog.product_category_code("house").unwrap(), 5);
        assert_eq!(AnimalCategory::Small.product_category_code("house").unwrap(), 3);
    }

    #[test]
    fn product_category_codes_follow_declaration_order() {
        assert_eq!(AnimalCategory::Dog.product_category_codes(), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(AnimalCategory::Cat.product_category_codes(), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(AnimalCategory::Small.product_category_codes(), vec![1, 2, 3]);
    }

    #[test]
    fn labels_come_from_the_section_table() {
        assert_eq!(AnimalCategory::Dog.category_label(2), Some("간식"));
        assert_eq!(AnimalCategory::Small.category_label(2), Some("기구"));
        assert_eq!(AnimalCategory::Small.category_label(6), None);
        assert_eq!(AnimalCategory::Small.label(), "소동물");
    }

    #[test]
    fn category_tokens_match_strum_names() {
        for category in ProductCategory::iter() {
            assert_eq!(category.info().token, category.as_ref());
        }
        for category in SmallAnimalCategory::iter() {
            assert_eq!(category.info().token, category.as_ref());
        }
        assert_eq!(AnimalCategory::Small.to_string(), "small");
    }

    #[rstest]
    #[case(None, SortBy::Price)]
    #[case(Some(""), SortBy::Price)]
    #[case(Some("price"), SortBy::Price)]
    #[case(Some("popularity"), SortBy::Popularity)]
    #[case(Some("newest"), SortBy::Newest)]
    fn sort_tokens(#[case] token: Option<&str>, #[case] expected: SortBy) {
        assert_eq!(SortBy::parse(token).unwrap(), expected);
    }

    #[test]
    fn unknown_sort_token_is_rejected() {
        assert_matches!(
            SortBy::parse(Some("rating")),
            Err(ServiceError::InvalidCategory(_))
        );
    }

    #[test]
    fn page_zero_is_rejected() {
        assert_matches!(Page::new(0), Err(ServiceError::ValidationError(_)));
    }

    #[test]
    fn first_pages_have_expected_windows() {
        let first = Page::new(1).unwrap();
        assert_eq!((first.offset(), first.limit()), (0, 32));
        let second = Page::new(2).unwrap();
        assert_eq!((second.offset(), second.limit()), (32, 12));
        let third = Page::new(3).unwrap();
        assert_eq!((third.offset(), third.limit()), (44, 12));
    }

    proptest! {
        #[test]
        fn pages_are_contiguous(n in 1u32..10_000) {
            let current = Page::new(n).unwrap();
            let next = Page::new(n + 1).unwrap();
            prop_assert_eq!(current.offset() + current.limit(), next.offset());
        }

        #[test]
        fn later_pages_are_never_larger_than_the_first(n in 1u32..10_000) {
            let page = Page::new(n).unwrap();
            prop_assert!(page.limit() <= FIRST_PAGE_SIZE);
        }
    }
}
