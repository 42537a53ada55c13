use browsir::command::{self, Context};
use browsir::config::{Environment, FsConfigSource};
use browsir::launcher::ProcessLauncher;
use browsir::{debug_log, error};

fn main() {
    let env = Environment::from_process();
    let start = env.is_verbose().then(std::time::Instant::now);

    // 加载配置：profile 表、共享 shortcut 与本地 shortcut
    let source = FsConfigSource::new(env.paths.clone());
    let ctx = match Context::load(env, &source) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("{}", e);
            std::process::exit(e.exit_code());
        }
    };

    // 跳过 argv[0]（程序名）
    let raw_args: Vec<String> = std::env::args().skip(1).collect();
    let stdin = std::io::stdin();
    let code = command::run(
        &raw_args,
        &ctx,
        &mut ProcessLauncher,
        stdin.lock(),
        std::io::stdout(),
    );

    if let Some(start) = start {
        debug_log!(ctx.env, "duration: {} ms", start.elapsed().as_millis());
    }
    std::process::exit(code);
}
