//! Decorative falling-star backdrop. Reads no editor state.

use leptos::prelude::*;

const STAR_COUNT: usize = 100;
const DRIFTER_COUNT: usize = 20;

#[derive(Clone, Debug, PartialEq)]
struct Star {
	left: f64,
	top: f64,
	size: f64,
	opacity: f64,
	duration: f64,
	delay: f64,
}

/// Simple pseudo-random number generator (deterministic for consistency).
fn rand_simple(seed: usize) -> f64 {
	let x = ((seed + 1) * 9301 + 49297) % 233280;
	(x as f64) / 233280.0
}

fn stars(count: usize, salt: usize) -> Vec<Star> {
	(0..count)
		.map(|i| {
			let r = |k: usize| rand_simple(i * 7 + k + salt);
			Star {
				left: r(0) * 100.0,
				top: r(1) * 100.0,
				size: r(2) * 3.0 + 1.0,
				opacity: r(3) * 0.8 + 0.2,
				duration: (r(4) * 3.0 + 1.0) * 8.0,
				delay: r(5) * 5.0,
			}
		})
		.collect()
}

fn star_style(star: &Star) -> String {
	format!(
		"left: {:.2}%; top: {:.2}%; width: {:.1}px; height: {:.1}px; --star-opacity: {:.2}; animation-duration: {:.1}s; animation-delay: {:.1}s;",
		star.left, star.top, star.size, star.size, star.opacity, star.duration, star.delay
	)
}

#[component]
pub fn Starfield() -> impl IntoView {
	let falling = stars(STAR_COUNT, 0)
		.iter()
		.map(|s| view! { <div class="star falling" style=star_style(s) /> })
		.collect_view();
	let drifting = stars(DRIFTER_COUNT, 1000)
		.iter()
		.map(|s| view! { <div class="star drifting" style=star_style(s) /> })
		.collect_view();

	view! {
		<div class="starfield" aria-hidden="true">
			{falling}
			{drifting}
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn stars_are_deterministic_and_in_range() {
		let a = stars(STAR_COUNT, 0);
		assert_eq!(a, stars(STAR_COUNT, 0));
		for s in &a {
			assert!((0.0..100.0).contains(&s.left));
			assert!((1.0..4.0).contains(&s.size));
			assert!((0.2..1.0).contains(&s.opacity));
		}
	}
}
