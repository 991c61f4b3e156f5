//! Text rendering of the landing page.
//!
//! The page is rendered top to bottom: header, the "Daily Inspiration" carousel, the
//! hero image, the "Coming Soon" teaser and the footer.
use carousel_common::state::CarouselState;

const TITLE: &str = "Talk2Trek";
const TAGLINE: &str = "Talk with us to Trek in your Life";
const IMAGE_ALT: &str = "Mountain trek inspiration";
const IMAGE_URL: &str = "https://images.pexels.com/photos/618833/pexels-photo-618833.jpeg\
                         ?auto=compress&cs=tinysrgb&w=800";
const FOOTER: &str = "Embark on your journey of motivation and discovery";
const HINT: &str = "[p] previous  [n] next  [1-5] jump  [q] quit";

/// Render the whole landing page for the given carousel state.
pub fn render(state: &CarouselState) -> String {
    format!(
        "^ {TITLE} ^\n\
         {TAGLINE}\n\
         \n\
         Daily Inspiration\n\
         {carousel}\n\
         [image] {IMAGE_ALT}\n        {IMAGE_URL}\n\
         \n\
         Coming Soon...\n\
         Stay Motivated!!!\n\
         \n\
         {FOOTER}\n",
        carousel = render_carousel(state),
    )
}

/// Render only the carousel block: spinner text while loading, otherwise quote and dots.
pub fn render_carousel(state: &CarouselState) -> String {
    if state.is_loading() {
        return String::from("  Loading quotes...\n");
    }

    let (text, author) = state
        .current()
        .map(|quote| (quote.text.as_str(), quote.author.as_str()))
        .unwrap_or_default();
    let dots: Vec<&str> = state
        .dots()
        .iter()
        .map(|dot| if dot.active { "●" } else { "○" })
        .collect();

    format!(
        "  \"{text}\"\n      — {author}\n  < {dots} >\n  {HINT}\n",
        dots = dots.join(" "),
    )
}
