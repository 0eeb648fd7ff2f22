use crate::core::catalog::{Course, Lesson};

pub(super) fn course() -> Course {
    Course::new(
        "Python",
        vec![
            Lesson::new(
                "Installing and running Python",
                "Install Python 3. Check it in a terminal with `python --version` or \
                 `python3 --version`, and run files with `python file.py`.\n\n\
                 **Exercise:** create `hello.py` that prints \"Hello\".",
            )
            .with_example("# hello.py\nprint(\"Hello\")"),
            Lesson::new(
                "Variables and types",
                "Assignment creates a variable. The basic types are `int`, `float`, `str` and \
                 `bool`; you never declare them.\n\n\
                 **Exercise:** define `name` and `age` and print them with an f-string.",
            )
            .with_example("name = \"Ivan\"\nage = 25\nprint(f\"Name: {name}, age: {age}\")"),
            Lesson::new(
                "Operators and expressions",
                "Arithmetic `+ - * / // % **`; comparisons `== != > < >= <=`.\n\n\
                 **Exercise:** compute `a // b` and `a % b`.",
            )
            .with_example("a = 7\nb = 3\nprint(a // b, a % b, a ** b)"),
            Lesson::new(
                "Conditionals: if/elif/else",
                "`if cond: ... elif other: ... else: ...`. Indentation is mandatory, usually four \
                 spaces.\n\n\
                 **Exercise:** print whether a number is even or odd.",
            )
            .with_example(
                r#"n = 5
if n % 2 == 0:
    print('Even')
else:
    print('Odd')"#,
            ),
            Lesson::new(
                "Loops: for and while",
                "`for i in range(5):` walks a range; `while cond:` repeats while a condition \
                 holds.\n\n\
                 **Exercise:** print 0..4 both ways.",
            )
            .with_example(
                r#"for i in range(5):
    print(i)

i = 0
while i < 5:
    print(i)
    i += 1"#,
            ),
            Lesson::new(
                "Lists and their operations",
                "Lists are mutable: `append`, `pop`, `insert` and slicing.\n\n\
                 **Exercise:** build a list, append an item and slice the first two.",
            )
            .with_example("nums = [1, 2, 3]\nnums.append(4)\nprint(nums[0:2])"),
            Lesson::new(
                "Tuples and sets",
                "A `tuple` is an immutable list; a `set` keeps unique items only.\n\n\
                 **Exercise:** build a set from `[1, 1, 2]` and check its length.",
            )
            .with_example("t = (1, 2)\ns = set([1, 1, 2])\nprint(len(s))"),
            Lesson::new(
                "Dictionaries",
                "A `dict` maps keys to values. Read with `d[key]` or `d.get(key, default)`.\n\n\
                 **Exercise:** create `user = {'name': ..., 'age': ...}` and print the name.",
            )
            .with_example("user = {'name': 'Olga', 'age': 28}\nprint(user['name'])"),
            Lesson::new(
                "Functions: def and return",
                "`def name(params): ... return value`. Functions give code structure.\n\n\
                 **Exercise:** write `add(a, b)` and call it.",
            )
            .with_example("def add(a, b):\n    return a + b\n\nprint(add(2, 3))"),
            Lesson::new(
                "Arguments and default values",
                "Functions take positional and keyword arguments, and parameters can have \
                 defaults.\n\n\
                 **Exercise:** write `greet(name='Guest')`.",
            )
            .with_example("def greet(name='Guest'):\n    print('Hello,', name)\n\ngreet()"),
            Lesson::new(
                "Files: open and with",
                "`with open('file', 'w', encoding='utf-8') as f: f.write(...)`. The `with` block \
                 closes the file for you.\n\n\
                 **Exercise:** write a line to a file and read it back.",
            )
            .with_example(
                r#"with open('data.txt', 'w', encoding='utf-8') as f:
    f.write('Hello')

with open('data.txt', 'r', encoding='utf-8') as f:
    print(f.read())"#,
            ),
            Lesson::new(
                "Exceptions: try/except/finally",
                "`try: ... except Exception as e: ... finally: ...` handles errors.\n\n\
                 **Exercise:** catch `ZeroDivisionError` when dividing by zero.",
            )
            .with_example(
                r#"try:
    x = 1 / 0
except ZeroDivisionError:
    print('Division by zero')"#,
            ),
            Lesson::new(
                "Modules and imports",
                "`import math`, `from datetime import date`. Split code into modules to reuse it.\n\n\
                 **Exercise:** import `math` and compute `sqrt(9)`.",
            )
            .with_example("import math\nprint(math.sqrt(9))"),
            Lesson::new(
                "List comprehensions",
                "A compact way to build lists: `[x * 2 for x in range(5) if x % 2 == 0]`.\n\n\
                 **Exercise:** build the squares of 0..4.",
            )
            .with_example("squares = [x * x for x in range(5)]\nprint(squares)"),
            Lesson::new(
                "Generators and yield",
                "`yield` turns a function into a generator that produces values lazily. Useful \
                 for long sequences.\n\n\
                 **Exercise:** write a generator for 0..n-1.",
            )
            .with_example(
                r#"def gen(n):
    for i in range(n):
        yield i

for x in gen(3):
    print(x)"#,
            ),
            Lesson::new(
                "Dates and times (datetime)",
                "`from datetime import datetime, date`. Use `datetime.now()` and `strftime` to \
                 format.\n\n\
                 **Exercise:** print today's date as dd.mm.YYYY.",
            )
            .with_example("from datetime import datetime\nprint(datetime.now().strftime('%d.%m.%Y'))"),
            Lesson::new(
                "JSON (json.dumps / loads)",
                "The `json` module turns objects into strings with `dumps` and back with `loads`. \
                 You will need it for APIs.\n\n\
                 **Exercise:** serialise a dict to a string and parse it back.",
            )
            .with_example(
                "import json\ndata = {'name': 'Ivan'}\ns = json.dumps(data)\nprint(json.loads(s))",
            ),
            Lesson::new(
                "Virtual environments and pip",
                "`python -m venv venv` creates an isolated environment; then `pip install package`.\n\n\
                 **Exercise:** create a venv and run `pip list` in it.",
            )
            .with_example(
                r#"# In a terminal:
# python -m venv venv
# source venv/bin/activate      (Linux/macOS)
# venv\Scripts\activate         (Windows)"#,
            ),
            Lesson::new(
                "Classes and OOP: class, __init__, methods",
                "A class is a template for objects. `__init__` is the constructor and `self` is \
                 the instance.\n\n\
                 **Exercise:** write a `Person` class with a `name` and a `hello()` method.",
            )
            .with_example(
                r#"class Person:
    def __init__(self, name):
        self.name = name

    def hello(self):
        print('Hello,', self.name)

p = Person('Olga')
p.hello()"#,
            ),
            Lesson::new(
                "Final mini project: a console app",
                "Build a small program with a menu, user input and basic operations to lock in \
                 the fundamentals.\n\n\
                 **Exercise:** write a calculator for `+ - * /` that handles division by zero.",
            )
            .with_example(
                r#"def calc(a, b, op):
    if op == '+': return a + b
    if op == '-': return a - b
    if op == '*': return a * b
    if op == '/': return a / b if b != 0 else None

print(calc(4, 2, '/'))"#,
            ),
        ],
    )
    .tagline("A general-purpose language")
    .icon("🐍")
    .syntax("python")
}
