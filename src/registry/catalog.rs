//! Static operation tables, grouped by input type and category.
//!
//! This is the data the rest of the crate is built around. Ids are unique
//! within an input type; `allowed_predecessors` lists the ids that may come
//! immediately before an operation in a chain (first position is always
//! admissible). `description` and `example` are static documentation for
//! the presentation layer; the snippets are never executed.

use super::Operation;
use super::ops;
use crate::value::InputType;

pub(super) static CATALOG: &[(InputType, &[(&str, &[Operation])])] = &[
    (InputType::Text, TEXT_CATEGORIES),
    (InputType::List, LIST_CATEGORIES),
    (InputType::Mapping, MAPPING_CATEGORIES),
];

static TEXT_CATEGORIES: &[(&str, &[Operation])] = &[
    (
        "manipulation",
        &[
            Operation {
                id: "toUpperCase",
                display_name: ".toUpperCase()",
                category: "manipulation",
                description: "Converts all characters to uppercase",
                example: "// Basic usage\nconst text = \"Hello World\";\nconst upper = text.toUpperCase();\n// Result: \"HELLO WORLD\"",
                compute: ops::to_upper_case,
                allowed_predecessors: &["toLowerCase", "trim"],
            },
            Operation {
                id: "toLowerCase",
                display_name: ".toLowerCase()",
                category: "manipulation",
                description: "Converts all characters to lowercase",
                example: "// Basic usage\nconst text = \"Hello World\";\nconst lower = text.toLowerCase();\n// Result: \"hello world\"",
                compute: ops::to_lower_case,
                allowed_predecessors: &["toUpperCase", "trim"],
            },
            Operation {
                id: "trim",
                display_name: ".trim()",
                category: "manipulation",
                description: "Removes whitespace from both ends",
                example: "// Basic usage\nconst text = \"  Hello World  \";\nconst clean = text.trim();\n// Result: \"Hello World\"",
                compute: ops::trim,
                allowed_predecessors: &[],
            },
        ],
    ),
    (
        "splitting",
        &[Operation {
            id: "split",
            display_name: ".split(' ')",
            category: "splitting",
            description: "Splits the text into a list of space-separated pieces",
            example: "// Basic usage\nconst text = \"The quick brown fox\";\nconst words = text.split(' ');\n// Result: [\"The\", \"quick\", \"brown\", \"fox\"]",
            compute: ops::split,
            allowed_predecessors: &["toUpperCase", "toLowerCase", "trim"],
        }],
    ),
];

static LIST_CATEGORIES: &[(&str, &[Operation])] = &[
    (
        "ordering",
        &[
            Operation {
                id: "sort",
                display_name: ".sort()",
                category: "ordering",
                description: "Sorts numbers numerically or strings alphabetically",
                example: "// Basic usage\nconst items = [10, 2, 1];\nconst sorted = items.sort();\n// Result: [1, 2, 10]",
                compute: ops::sort,
                allowed_predecessors: &["reverse", "unique"],
            },
            Operation {
                id: "reverse",
                display_name: ".reverse()",
                category: "ordering",
                description: "Reverses the order of the list",
                example: "// Basic usage\nconst items = [1, 2, 3];\nconst flipped = items.reverse();\n// Result: [3, 2, 1]",
                compute: ops::reverse,
                allowed_predecessors: &["sort", "unique"],
            },
        ],
    ),
    (
        "transformation",
        &[Operation {
            id: "unique",
            display_name: ".filter(unique)",
            category: "transformation",
            description: "Removes duplicate items, keeping the first occurrence",
            example: "// Basic usage\nconst items = [3, 1, 3, 2];\nconst distinct = items.filter((v, i) => items.indexOf(v) === i);\n// Result: [3, 1, 2]",
            compute: ops::unique,
            allowed_predecessors: &["sort", "reverse"],
        }],
    ),
    (
        "aggregation",
        &[Operation {
            id: "join",
            display_name: ".join(', ')",
            category: "aggregation",
            description: "Joins the items into a single comma-separated text",
            example: "// Basic usage\nconst items = [\"apple\", \"banana\"];\nconst text = items.join(', ');\n// Result: \"apple, banana\"",
            compute: ops::join,
            allowed_predecessors: &["sort", "reverse", "unique"],
        }],
    ),
];

static MAPPING_CATEGORIES: &[(&str, &[Operation])] = &[
    (
        "inspection",
        &[
            Operation {
                id: "keys",
                display_name: "Object.keys()",
                category: "inspection",
                description: "Extracts the keys as a list",
                example: "// Basic usage\nconst person = {\"name\": \"John\", \"age\": 30};\nconst ks = Object.keys(person);\n// Result: [\"name\", \"age\"]",
                compute: ops::keys,
                allowed_predecessors: &[],
            },
            Operation {
                id: "values",
                display_name: "Object.values()",
                category: "inspection",
                description: "Extracts the values as a list",
                example: "// Basic usage\nconst person = {\"name\": \"John\", \"age\": 30};\nconst vs = Object.values(person);\n// Result: [\"John\", 30]",
                compute: ops::values,
                allowed_predecessors: &[],
            },
            Operation {
                id: "entries",
                display_name: "Object.entries()",
                category: "inspection",
                description: "Extracts [key, value] pairs as a list",
                example: "// Basic usage\nconst person = {\"name\": \"John\", \"age\": 30};\nconst es = Object.entries(person);\n// Result: [[\"name\", \"John\"], [\"age\", 30]]",
                compute: ops::entries,
                allowed_predecessors: &[],
            },
        ],
    ),
    (
        "ordering",
        &[
            Operation {
                id: "sort",
                display_name: ".sort()",
                category: "ordering",
                description: "Sorts the extracted list",
                example: "// Basic usage\nconst person = {\"name\": \"John\", \"age\": 30};\nconst sorted = Object.keys(person).sort();\n// Result: [\"age\", \"name\"]",
                compute: ops::sort,
                allowed_predecessors: &["keys", "values", "entries", "reverse"],
            },
            Operation {
                id: "reverse",
                display_name: ".reverse()",
                category: "ordering",
                description: "Reverses the extracted list",
                example: "// Basic usage\nconst person = {\"name\": \"John\", \"age\": 30};\nconst flipped = Object.keys(person).reverse();\n// Result: [\"age\", \"name\"]",
                compute: ops::reverse,
                allowed_predecessors: &["keys", "values", "entries", "sort"],
            },
        ],
    ),
];
