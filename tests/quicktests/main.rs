//! Property tests against the public API of `balanced_bst`.

mod tree;
