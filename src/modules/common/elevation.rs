use crate::modules::common::error::SweepError;

/// 检查当前进程是否具有管理员权限
#[cfg(windows)]
pub fn is_admin() -> bool {
    unsafe { windows::Win32::UI::Shell::IsUserAnAdmin().as_bool() }
}

#[cfg(not(windows))]
pub fn is_admin() -> bool {
    false
}

/// 以管理员权限重新启动当前程序
///
/// 用户在 UAC 弹窗中拒绝时返回错误，调用方继续以降级模式运行。
#[cfg(windows)]
pub fn relaunch_elevated() -> Result<(), SweepError> {
    use windows::core::{HSTRING, PCWSTR};
    use windows::Win32::UI::Shell::ShellExecuteW;
    use windows::Win32::UI::WindowsAndMessaging::SW_SHOWNORMAL;

    let exe = std::env::current_exe()?;
    let params: Vec<String> = std::env::args().skip(1).collect();

    let file = HSTRING::from(exe.as_os_str());
    let parameters = HSTRING::from(params.join(" "));

    let instance = unsafe {
        ShellExecuteW(
            None,
            &HSTRING::from("runas"),
            &file,
            &parameters,
            PCWSTR::null(),
            SW_SHOWNORMAL,
        )
    };

    if instance.0 as isize <= 32 {
        return Err(SweepError::PermissionDenied(
            "提权启动失败或被用户拒绝".to_string(),
        ));
    }

    Ok(())
}

#[cfg(not(windows))]
pub fn relaunch_elevated() -> Result<(), SweepError> {
    Err(SweepError::Unsupported(
        "仅 Windows 支持提权重启".to_string(),
    ))
}
