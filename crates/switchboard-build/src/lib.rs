//! Switchboard のパッケージング機能
//!
//! コンポーネントのソースをビルドディレクトリへ写し、言語ごとの依存関係
//! インストールを実行してから、デプロイ可能な zip アーカイブに固める。

pub mod archive;
pub mod builder;
pub mod copy;
pub mod error;
pub mod installer;

pub use archive::zip_directory;
pub use builder::{PackageOptions, package_component, package_functions};
pub use copy::{copy_source, should_skip};
pub use error::{BuildError, Result};
pub use installer::install_dependencies;
