use crate::core::catalog::{Course, Lesson};

pub(super) fn course() -> Course {
    Course::new(
        "HTML Basics",
        vec![
            Lesson::new(
                "Introduction to HTML",
                "HTML is the markup language that gives a page its structure. A document starts \
                 with `<!DOCTYPE html>`; inside `<html>` live `<head>` and `<body>`.\n\n\
                 **Exercise:** create `index.html` with minimal markup and a page title.",
            )
            .with_example(
                r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>My page</title>
  </head>
  <body>
    <h1>Hello</h1>
  </body>
</html>"#,
            ),
            Lesson::new(
                "Headings and paragraphs",
                "Headings `<h1>`-`<h6>` set the hierarchy of a page, paragraphs use `<p>`. \
                 Headings matter for structure and for SEO.\n\n\
                 **Exercise:** add an `<h1>`, an `<h2>` and three paragraphs to your page.",
            )
            .with_example(
                r#"<h1>Main heading</h1>
<h2>Subheading</h2>
<p>First paragraph.</p>
<p>Second paragraph.</p>"#,
            ),
            Lesson::new(
                "Lists (ul/ol/li)",
                "Unordered lists use `<ul>`, ordered lists use `<ol>`. Every entry inside is an `<li>`.\n\n\
                 **Exercise:** make a shopping list (`ul`) and a list of steps (`ol`).",
            )
            .with_example(
                r#"<ul>
  <li>Bread</li>
  <li>Milk</li>
</ul>

<ol>
  <li>Open the laptop</li>
  <li>Write code</li>
</ol>"#,
            ),
            Lesson::new(
                "Links and anchors",
                "A link is `<a href=\"URL\">text</a>`. To open it in a new tab add \
                 `target=\"_blank\" rel=\"noopener\"`.\n\n\
                 **Exercise:** link to MDN and to a section of your own page (an anchor).",
            )
            .with_example(
                r##"<a href="https://developer.mozilla.org" target="_blank" rel="noopener">MDN</a>
<a href="#section1">Jump to section</a>"##,
            ),
            Lesson::new(
                "Images and the alt attribute",
                "`<img src=\"...\" alt=\"description\">` embeds an image. The `alt` attribute is \
                 required for accessibility.\n\n\
                 **Exercise:** insert a picture with a meaningful `alt`.",
            )
            .with_example(r#"<img src="cat.jpg" alt="A grey cat sitting on a sofa">"#),
            Lesson::new(
                "Forms: input, textarea, select",
                "A form collects data: `<form action method>`. Fields are `<input>`, `<textarea>` \
                 and `<select>`. The server needs a `name` on every field.\n\n\
                 **Exercise:** build a form with a name, an email and a submit button.",
            )
            .with_example(
                r#"<form action="/submit" method="post">
  <input type="text" name="name" placeholder="Name">
  <input type="email" name="email" placeholder="Email">
  <button type="submit">Send</button>
</form>"#,
            ),
            Lesson::new(
                "Useful input attributes (type and required)",
                "`input` supports `type=email/date/number/password` and the `required` attribute \
                 for mandatory fields.\n\n\
                 **Exercise:** add a required email field that checks its type.",
            )
            .with_example(
                r#"<input type="email" name="email" required placeholder="email@example.com">"#,
            ),
            Lesson::new(
                "Semantic HTML5 tags",
                "`header`, `nav`, `main`, `article`, `section` and `footer` describe the structure \
                 of a page and help search engines.\n\n\
                 **Exercise:** mark up a simple page with `header`, `nav` and `main > article`.",
            )
            .with_example(
                r#"<header>Header</header>
<nav>Menu</nav>
<main><article>Article</article></main>
<footer>Footer</footer>"#,
            ),
            Lesson::new(
                "Tables (table, tr, th, td)",
                "Tables use `<table>`, rows `<tr>`, header cells `<th>` and data cells `<td>`. \
                 Add `<caption>` and `scope` for accessibility.\n\n\
                 **Exercise:** build a 3x2 table with column headers.",
            )
            .with_example(
                r#"<table>
  <caption>Contacts</caption>
  <tr><th>Name</th><th>Phone</th></tr>
  <tr><td>Anna</td><td>+1...</td></tr>
</table>"#,
            ),
            Lesson::new(
                "Embedding media (audio, video)",
                "`<audio>` and `<video>` accept `controls`, `src` and nested `<source>` elements. \
                 Several sources keep playback working across browsers.\n\n\
                 **Exercise:** add a video with controls.",
            )
            .with_example(
                r#"<video controls width="320">
  <source src="clip.mp4" type="video/mp4">
  Your browser does not support video.
</video>"#,
            ),
            Lesson::new(
                "data- attributes and ARIA",
                "`data-*` attributes carry custom values for scripts. ARIA attributes such as \
                 `aria-label` and `role` help screen readers.\n\n\
                 **Exercise:** give a button an `aria-label`.",
            )
            .with_example(r#"<button aria-label="Close window">✕</button>"#),
            Lesson::new(
                "Inline and block elements",
                "Inline elements (`span`, `a`, `img`) do not start a new line; block elements \
                 (`div`, `p`, `h1`) do. This matters for layout.\n\n\
                 **Exercise:** wrap a word in a `span` and give it a class for styling.",
            )
            .with_example(r#"<p>This is an <span class="highlight">important</span> word.</p>"#),
            Lesson::new(
                "More links: target, rel, tel, mailto",
                "`target=\"_blank\"` opens a new tab and `rel=\"noopener noreferrer\"` keeps it \
                 safe. Links can also point to phone numbers and email addresses.\n\n\
                 **Exercise:** add a `mailto:` link and a phone link.",
            )
            .with_example(
                r#"<a href="mailto:hello@example.com">Write to us</a>
<a href="tel:+11234567890">Call us</a>"#,
            ),
            Lesson::new(
                "Forms: browser validation and pattern",
                "HTML offers basic validation out of the box: `required`, `minlength`, \
                 `maxlength` and `pattern` (a regular expression).\n\n\
                 **Exercise:** add an input whose `pattern` accepts exactly 10 digits.",
            )
            .with_example(r#"<input type="text" pattern="\d{10}" title="10 digits" required>"#),
            Lesson::new(
                "SEO basics: meta tags and title",
                "Put a `<title>`, a `<meta name=\"description\">` and a `viewport` tag in `<head>`. \
                 They drive indexing, mobile layout and link previews.\n\n\
                 **Exercise:** add a meta description and a viewport tag to your head.",
            )
            .with_example(
                r#"<meta name="description" content="A short description of the page">
<meta name="viewport" content="width=device-width, initial-scale=1">"#,
            ),
        ],
    )
    .tagline("Building blocks of web pages")
    .icon("🌐")
    .syntax("html")
}
