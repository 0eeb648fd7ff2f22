use crate::core::catalog::{Course, Lesson};

pub(super) fn course() -> Course {
    Course::new(
        "JavaScript",
        vec![
            Lesson::new(
                "Introduction and loading a script",
                "JavaScript adds behaviour to a page. Load it at the end of `body`, or in the \
                 head with `defer`.\n\n\
                 **Exercise:** load `app.js` with `defer` and log `'Loaded'`.",
            )
            .with_example(
                r#"// index.html: <script src="app.js" defer></script>
console.log('Loaded');"#,
            ),
            Lesson::new(
                "Variables: let, const, var",
                "`let` declares a variable you can reassign, `const` a constant, and `var` is the \
                 legacy function-scoped form.\n\n\
                 **Exercise:** declare `const PI` and `let counter`.",
            )
            .with_example("const PI = 3.14;\nlet counter = 0;"),
            Lesson::new(
                "Data types and typeof",
                "Primitives are number, string, boolean, null, undefined, symbol and bigint; \
                 everything else is an object (Object, Array, Function). Check with `typeof`.\n\n\
                 **Exercise:** print `typeof` for several values.",
            )
            .with_example(
                r#"console.log(typeof 42, typeof 'hi', typeof null); // "number" "string" "object""#,
            ),
            Lesson::new(
                "Operators and expressions",
                "Arithmetic `+ - * / %`, string concatenation, logical `&&` and `||`, and the two \
                 comparisons `==` and strict `===`.\n\n\
                 **Exercise:** compare `0 == '0'` with `0 === '0'`.",
            )
            .with_example("console.log(0 == '0');\nconsole.log(0 === '0');"),
            Lesson::new(
                "Conditions: if / else / switch",
                "`if`/`else` branches; `switch` reads better when one value has many cases.\n\n\
                 **Exercise:** check whether an age is at least 18.",
            )
            .with_example(
                r#"const age = 20;
if (age >= 18) {
  console.log('Adult');
} else {
  console.log('Minor');
}"#,
            ),
            Lesson::new(
                "Functions: declarations and arrows",
                "`function foo() {}` and `const foo = () => {}`. Arrow functions have no `this` \
                 of their own.\n\n\
                 **Exercise:** write `sum(a, b)`.",
            )
            .with_example("function sum(a, b) { return a + b; }\nconst sum2 = (a, b) => a + b;"),
            Lesson::new(
                "Arrays: creation and basic methods",
                "Create an array and use `push`/`pop`, `shift`/`unshift` and `length`.\n\n\
                 **Exercise:** add an element and print the last one.",
            )
            .with_example("const arr = [1, 2, 3];\narr.push(4);\nconsole.log(arr[arr.length - 1]);"),
            Lesson::new(
                "Iterating arrays: for, for..of, forEach, map",
                "`for..of` walks values, `forEach` runs side effects, `map` returns a new array.\n\n\
                 **Exercise:** double every element with `map`.",
            )
            .with_example("const doubled = [1, 2, 3].map(x => x * 2);"),
            Lesson::new(
                "Objects: properties and access",
                "An object is a set of key: value pairs, read with dot or bracket notation.\n\n\
                 **Exercise:** create `user { name, age }` and print the name.",
            )
            .with_example("const user = { name: 'Ivan', age: 30 };\nconsole.log(user.name);"),
            Lesson::new(
                "Object methods and this",
                "A method is a function stored on an object. Called as `obj.method()`, `this` \
                 refers to `obj`.\n\n\
                 **Exercise:** add a `greet` method to `user`.",
            )
            .with_example(
                r#"const user = {
  name: 'Anna',
  greet() { console.log('Hello, ' + this.name); },
};
user.greet();"#,
            ),
            Lesson::new(
                "Promises",
                "A Promise is pending, fulfilled or rejected. Handle the outcome with `then` and \
                 `catch`.\n\n\
                 **Exercise:** create a promise that resolves after a `setTimeout`.",
            )
            .with_example(
                "const p = new Promise(res => setTimeout(() => res('ok'), 500));\np.then(console.log);",
            ),
            Lesson::new(
                "async/await",
                "An `async` function lets you write asynchronous code top to bottom with `await`. \
                 Wrap it in `try`/`catch`.\n\n\
                 **Exercise:** write an async function that awaits `delay(300)`.",
            )
            .with_example(
                r#"const delay = ms => new Promise(r => setTimeout(r, ms));
async function run() {
  await delay(300);
  console.log('done');
}
run();"#,
            ),
            Lesson::new(
                "The DOM: querySelector and textContent",
                "`document.querySelector` and `querySelectorAll` find elements; `textContent` and \
                 `innerHTML` change their contents.\n\n\
                 **Exercise:** find an element by id and change its text.",
            )
            .with_example("document.getElementById('title').textContent = 'New heading';"),
            Lesson::new(
                "Creating elements and append",
                "`document.createElement` plus `appendChild`/`append` insert new nodes into the DOM.\n\n\
                 **Exercise:** create an `li` and add it to a `ul`.",
            )
            .with_example(
                r#"const li = document.createElement('li');
li.textContent = 'Item';
document.querySelector('ul').append(li);"#,
            ),
            Lesson::new(
                "Events: addEventListener",
                "`addEventListener('click', handler)` attaches a handler. The event object carries \
                 details such as `target` and `preventDefault`.\n\n\
                 **Exercise:** show an alert when a button is clicked.",
            )
            .with_example(
                "document.querySelector('button').addEventListener('click', () => alert('Clicked'));",
            ),
            Lesson::new(
                "Forms and FormData",
                "`FormData` gathers every field of a form. Call `e.preventDefault()` in a submit \
                 handler to stop the page from reloading.\n\n\
                 **Exercise:** collect the form with FormData before submit and log the values.",
            )
            .with_example(
                r#"const form = document.querySelector('form');
form.addEventListener('submit', e => {
  e.preventDefault();
  const fd = new FormData(form);
  console.log(...fd.entries());
});"#,
            ),
            Lesson::new(
                "LocalStorage",
                "`localStorage.setItem`/`getItem` store strings in the browser. Use \
                 `JSON.stringify`/`JSON.parse` for objects.\n\n\
                 **Exercise:** save the user's name as they type it.",
            )
            .with_example("localStorage.setItem('name', 'Ivan');\nconsole.log(localStorage.getItem('name'));"),
            Lesson::new(
                "The Fetch API",
                "`fetch(url).then(r => r.json())` makes HTTP requests. `async`/`await` reads more \
                 naturally.\n\n\
                 **Exercise:** load `https://jsonplaceholder.typicode.com/todos/1` and log it.",
            )
            .with_example(
                r#"async function load() {
  const r = await fetch('https://jsonplaceholder.typicode.com/todos/1');
  const data = await r.json();
  console.log(data);
}"#,
            ),
            Lesson::new(
                "Error handling with try/catch",
                "`try { ... } catch (e) { ... }` catches exceptions. It matters most around \
                 network requests and parsing.\n\n\
                 **Exercise:** wrap a `fetch` in try/catch and show an error message.",
            )
            .with_example("try { JSON.parse('invalid'); } catch (e) { console.error('Parse error'); }"),
            Lesson::new(
                "Final mini project: a TODO list",
                "Put it together: an input, an add button, a list, and persistence in \
                 localStorage.\n\n\
                 **Exercise:** add items to the list and save them to localStorage.",
            )
            .with_example(
                r#"const todos = JSON.parse(localStorage.getItem('todos') || '[]');
function addTodo(text) {
  todos.push({ text, done: false });
  localStorage.setItem('todos', JSON.stringify(todos));
}"#,
            ),
        ],
    )
    .tagline("Interactivity and logic")
    .icon("⚡")
    .syntax("js")
}
