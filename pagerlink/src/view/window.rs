//! Which pages a pager widget shows.

/// One position in a pager widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry {
	/// The link to the previous page, absent on the first page.
	Previous(Option<u32>),
	/// A link to another page.
	Page(u32),
	/// The page being shown.
	Current(u32),
	/// A gap of more than one page.
	Dots,
	/// The link to the next page, absent on the last page.
	Next(Option<u32>),
}

/// Lay out a widget showing `proximity` pages either side of `current`.
///
/// The window is shifted rather than cut when it runs into either end, so it keeps its width when there are enough pages. The first and last pages are always shown. A gap to them is filled with the single page it hides, or with [`Entry::Dots`] when it hides more.
#[must_use]
pub fn entries(current: u32, page_count: u32, proximity: u32) -> Vec<Entry> {
	let count = i64::from(page_count.max(1));
	let current = i64::from(current).clamp(1, count);
	let proximity = i64::from(proximity);
	// in range by construction
	let page = |number: i64| u32::try_from(number).unwrap_or_default();

	let mut start = current - proximity;
	let mut end = current + proximity;
	if start < 1 {
		end = (end + 1 - start).min(count);
		start = 1;
	}
	if end > count {
		start = (start - (end - count)).max(1);
		end = count;
	}

	let mut ret = vec![Entry::Previous((current > 1).then(|| page(current - 1)))];

	if start > 1 {
		ret.push(Entry::Page(1));
		if start == 3 {
			ret.push(Entry::Page(2));
		} else if start > 3 {
			ret.push(Entry::Dots);
		}
	}

	ret.extend((start..=end).map(|number| {
		if number == current {
			Entry::Current(page(number))
		} else {
			Entry::Page(page(number))
		}
	}));

	if end < count {
		if end == count - 2 {
			ret.push(Entry::Page(page(count - 1)));
		} else if end < count - 2 {
			ret.push(Entry::Dots);
		}
		ret.push(Entry::Page(page(count)));
	}

	ret.push(Entry::Next((current < count).then(|| page(current + 1))));

	ret
}
