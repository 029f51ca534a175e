pub mod clean;
pub mod list;
pub mod uninstall;

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// 列出所有已安装的程序
    List(list::ListCommand),

    /// 卸载程序并清理残留
    Uninstall(uninstall::UninstallCommand),

    /// 清理程序残留文件
    Clean(clean::CleanCommand),
}
