use std::ops::Range;

pub type PageNum = u32;

#[derive(serde::Deserialize, Clone, Copy)]
pub struct Query {
	pub page: Option<PageNum>,
	pub page_size: Option<PageNum>,
}

pub const fn default_page() -> PageNum {
	1
}

impl Query {
	#[inline]
	pub fn page(&self) -> PageNum {
		self.page.unwrap_or(default_page()).max(1)
	}

	#[inline]
	pub fn page_size(&self, default: PageNum) -> PageNum {
		self.page_size.unwrap_or(default).max(1)
	}
}

/// One page of a listing of `num_items` items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
	current: PageNum,
	num_pages: PageNum,
	items: Range<usize>,
}

impl Page {
	/// `None` if the requested page is past the end. An empty listing still has one (empty) page.
	pub fn new(query: Query, num_items: usize, default_page_size: PageNum) -> Option<Self> {
		let page_size = usize::try_from(query.page_size(default_page_size)).ok()?;
		let current = query.page();
		let num_pages = std::cmp::max(num_items.div_ceil(page_size), 1);
		let num_pages = PageNum::try_from(num_pages).ok()?;
		if current > num_pages {
			return None;
		}

		let offset = usize::try_from(current - 1).ok()? * page_size;
		Some(Self {
			current,
			num_pages,
			items: offset..std::cmp::min(offset + page_size, num_items),
		})
	}

	/// The indices of the items on this page.
	pub fn items(&self) -> Range<usize> {
		self.items.clone()
	}
}

impl pagerlink::Pager for Page {
	fn current_page(&self) -> u32 {
		self.current
	}

	fn page_count(&self) -> u32 {
		self.num_pages
	}
}
