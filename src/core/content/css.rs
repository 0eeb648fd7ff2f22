use crate::core::catalog::{Course, Lesson};

pub(super) fn course() -> Course {
    Course::new(
        "CSS Styling",
        vec![
            Lesson::new(
                "Introduction to CSS",
                "CSS controls how a page looks. Link an external file with \
                 `<link rel=\"stylesheet\" href=\"style.css\">` or write rules inside a \
                 `<style>` block in the head.\n\n\
                 **Exercise:** link `style.css` and set `body { font-family: sans-serif }`.",
            )
            .with_example(
                r#"/* index.html: <link rel="stylesheet" href="style.css"> */
body {
  font-family: Inter, sans-serif;
}"#,
            ),
            Lesson::new(
                "Selectors: tag, class, id",
                "Selectors pick elements: `tag`, `.class`, `#id`. Combining and nesting \
                 selectors makes them precise.\n\n\
                 **Exercise:** create a `.card` class and apply it to a `div`.",
            )
            .with_example(
                r#".card {
  padding: 12px;
  border: 1px solid #ddd;
  border-radius: 8px;
}"#,
            ),
            Lesson::new(
                "Colors, fonts and sizes",
                "Key properties are `color`, `background-color`, `font-size` and `font-family`. \
                 Prefer `rem`/`em` units so text scales.\n\n\
                 **Exercise:** make the heading 24px and the body text 16px.",
            )
            .with_example(
                r#"h1 { font-size: 24px; }
body { font-size: 16px; color: #222; }"#,
            ),
            Lesson::new(
                "The box model: margin, padding, border",
                "Every element is content → padding → border → margin. Vertical margins \
                 between blocks collapse into one.\n\n\
                 **Exercise:** create a `.box` with margin and padding and inspect the result.",
            )
            .with_example(r#".box { margin: 16px; padding: 12px; border: 1px solid #ccc; }"#),
            Lesson::new(
                "Display: block, inline, inline-block, none",
                "`display` sets how an element flows. `inline` ignores width and height, \
                 `block` honours them, `none` hides the element.\n\n\
                 **Exercise:** switch a `span` to `inline-block` and give it a width.",
            )
            .with_example(r#".inline-block { display: inline-block; width: 120px; }"#),
            Lesson::new(
                "Position: static, relative, absolute, fixed",
                "`relative` shifts an element from its normal place; `absolute` positions it \
                 against the nearest positioned ancestor; `fixed` pins it to the viewport.\n\n\
                 **Exercise:** nest an absolutely positioned child inside a relative wrapper.",
            )
            .with_example(
                r#".wrapper { position: relative; }
.child { position: absolute; top: 10px; right: 10px; }"#,
            ),
            Lesson::new(
                "Flexbox: container and axes",
                "Flexbox lays items out along one axis. The essentials are `display: flex`, \
                 `justify-content` and `align-items`.\n\n\
                 **Exercise:** build a horizontal menu with even spacing.",
            )
            .with_example(
                r#".row {
  display: flex;
  gap: 12px;
  justify-content: space-between;
  align-items: center;
}"#,
            ),
            Lesson::new(
                "Flex: order and wrapping",
                "`flex-wrap` lets items move onto new lines; `order` changes their visual order.\n\n\
                 **Exercise:** make a wrapping container and watch it on a narrow screen.",
            )
            .with_example(r#".wrap { display: flex; flex-wrap: wrap; }"#),
            Lesson::new(
                "Grid: two-dimensional layout",
                "CSS Grid handles rows and columns at once: `grid-template-columns`, \
                 `grid-template-rows`, `gap`, `grid-area`.\n\n\
                 **Exercise:** create a three-column grid and place cards in it.",
            )
            .with_example(
                r#".grid {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 12px;
}"#,
            ),
            Lesson::new(
                "Pseudo-classes and pseudo-elements",
                "`:hover`, `:focus` and `:active` match states; `::before` and `::after` \
                 generate content.\n\n\
                 **Exercise:** add a `::before` icon to a `.badge`.",
            )
            .with_example(r#".badge::before { content: "★"; margin-right: 6px; }"#),
            Lesson::new(
                "Transforms and animations",
                "`transform` (translate, rotate, scale) combined with `transition` gives smooth \
                 changes; `@keyframes` defines full animations.\n\n\
                 **Exercise:** add a hover effect that changes `translateY` and `opacity`.",
            )
            .with_example(
                r#".btn { transition: transform .2s; }
.btn:hover { transform: translateY(-4px); }"#,
            ),
            Lesson::new(
                "Media queries: responsive design",
                "`@media (max-width: 600px) { ... }` adapts the layout to the screen width. \
                 Start from the mobile layout and grow from there.\n\n\
                 **Exercise:** hide the sidebar on screens narrower than 600px.",
            )
            .with_example(r#"@media (max-width: 600px) { .sidebar { display: none; } }"#),
            Lesson::new(
                "Web fonts",
                "Load fonts with `@font-face` or from Google Fonts. Always list fallbacks.\n\n\
                 **Exercise:** load a Google Font and apply it to `body`.",
            )
            .with_example(
                r#"/* in <head>:
   <link href="https://fonts.googleapis.com/css2?family=Inter:wght@400;600&display=swap" rel="stylesheet"> */
body { font-family: 'Inter', system-ui, sans-serif; }"#,
            ),
            Lesson::new(
                "CSS custom properties",
                "Declare `--name: value;` and read it with `var(--name)`. Handy for themes and \
                 repeated values.\n\n\
                 **Exercise:** define `--primary` and `--bg` and use them.",
            )
            .with_example(
                r#":root { --primary: #4ea1ff; --bg: #0b0f14; }
.btn { background: var(--primary); }"#,
            ),
            Lesson::new(
                "Organising styles with BEM",
                "BEM names classes as block__element--modifier. It keeps class names structured \
                 and free of conflicts.\n\n\
                 **Exercise:** rename a card's classes to `.card`, `.card__title` and `.card--small`.",
            )
            .with_example(
                r#".card { padding: 12px; }
.card__title { font-weight: 700; }
.card--small { font-size: 14px; }"#,
            ),
        ],
    )
    .tagline("Styling and layout")
    .icon("🎨")
    .syntax("css")
}
