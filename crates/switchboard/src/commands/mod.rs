pub mod deploy;
pub mod package;
pub mod teardown;

use colored::Colorize;
use switchboard_cloud::{CloudProvider, NoCredentialProvider};
use switchboard_cloud_aws::AwsProvider;
use switchboard_core::{Cloud, ProgressUpdate};

/// 設定のクラウド値に応じたプロバイダーを組み立てる
pub(crate) fn provider_for(cloud: Cloud) -> Box<dyn CloudProvider> {
    match cloud {
        Cloud::Aws => Box::new(AwsProvider::new()),
        Cloud::Azure => Box::new(NoCredentialProvider::azure()),
        Cloud::Gcp => Box::new(NoCredentialProvider::gcp()),
    }
}

/// 進捗メッセージを1行描画する。エラー行は赤くする
pub(crate) fn print_update(update: &ProgressUpdate) {
    if update.message.starts_with("Error") {
        println!("{}", update.message.red());
    } else {
        println!("{}", update.message);
    }
}
