//! Gallery views and their paging plans.

use std::num::NonZeroUsize;

use super::{Error, FilterSpec, PhotographerId};

const fn nz(n: usize) -> NonZeroUsize {
    NonZeroUsize::MIN.saturating_add(n.saturating_sub(1))
}

/// How many photos a view requests up front and on each later load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PagePlan {
    initial: NonZeroUsize,
    increment: NonZeroUsize,
}

impl PagePlan {
    /// Home feed: nine photos, then six per scroll.
    pub const HOME: Self = Self {
        initial: nz(9),
        increment: nz(6),
    };

    /// Gallery, featured, and search views: twelve at a time.
    pub const GALLERY: Self = Self {
        initial: nz(12),
        increment: nz(12),
    };

    /// Photographer profile: twelve, then six per scroll.
    pub const PROFILE: Self = Self {
        initial: nz(12),
        increment: nz(6),
    };

    /// A plan with custom sizes.
    ///
    /// # Examples
    /// ```
    /// use gallery::domain::PagePlan;
    ///
    /// let plan = PagePlan::new(2, 2).expect("non-zero sizes");
    /// assert_eq!(plan.initial(), 2);
    /// assert!(PagePlan::new(0, 2).is_err());
    /// ```
    pub fn new(initial: usize, increment: usize) -> Result<Self, Error> {
        match (NonZeroUsize::new(initial), NonZeroUsize::new(increment)) {
            (Some(initial), Some(increment)) => Ok(Self { initial, increment }),
            _ => Err(Error::invalid_request("page sizes must be greater than zero")),
        }
    }

    /// A plan using the same size for every page.
    pub fn uniform(size: usize) -> Result<Self, Error> {
        Self::new(size, size)
    }

    /// Size of the first page.
    pub fn initial(self) -> usize {
        self.initial.get()
    }

    /// Size of each later page.
    pub fn increment(self) -> usize {
        self.increment.get()
    }

    pub(crate) fn initial_limit(self) -> NonZeroUsize {
        self.initial
    }

    pub(crate) fn increment_limit(self) -> NonZeroUsize {
        self.increment
    }
}

/// A browsable photo listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryView {
    Home,
    Gallery,
    Featured,
    Search(FilterSpec),
    Profile(PhotographerId),
}

impl GalleryView {
    /// Paging plan the view uses.
    pub fn page_plan(&self) -> PagePlan {
        match self {
            Self::Home => PagePlan::HOME,
            Self::Gallery | Self::Featured | Self::Search(_) => PagePlan::GALLERY,
            Self::Profile(_) => PagePlan::PROFILE,
        }
    }

    /// Filter the view starts with.
    pub fn filter(&self) -> FilterSpec {
        match self {
            Self::Home | Self::Gallery => FilterSpec::default(),
            Self::Featured => FilterSpec::featured_only(),
            Self::Search(filter) => filter.clone(),
            Self::Profile(id) => FilterSpec::for_photographer(*id),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(GalleryView::Home, 9, 6)]
    #[case(GalleryView::Gallery, 12, 12)]
    #[case(GalleryView::Featured, 12, 12)]
    #[case(GalleryView::Search(FilterSpec::default()), 12, 12)]
    #[case(GalleryView::Profile(PhotographerId::new(1)), 12, 6)]
    fn views_use_their_page_plans(
        #[case] view: GalleryView,
        #[case] initial: usize,
        #[case] increment: usize,
    ) {
        let plan = view.page_plan();
        assert_eq!((plan.initial(), plan.increment()), (initial, increment));
    }

    #[test]
    fn featured_view_filters_on_flag() {
        assert!(GalleryView::Featured.filter().featured());
    }

    #[test]
    fn profile_view_filters_on_owner() {
        let filter = GalleryView::Profile(PhotographerId::new(4)).filter();
        assert!(filter.photographer().contains(&PhotographerId::new(4)));
    }

    #[test]
    fn rejects_zero_increment() {
        let err = PagePlan::new(9, 0).expect_err("zero increment rejected");
        assert_eq!(err.code(), crate::domain::ErrorCode::InvalidRequest);
    }
}
