use cargokit_hvigor_lib::consts::{BUILD_CONFIGURATION, PLUGIN_ID};
use cargokit_hvigor_lib::platform::{OsFamily, target_platforms};

pub fn cmd_info() {
  let family = OsFamily::current();

  println!("Plugin: {}", PLUGIN_ID);
  println!("OS family: {}", family);
  println!("Build tool: {}", family.build_tool_script());
  println!("Platforms: {}", target_platforms());
  println!("Configuration: {}", BUILD_CONFIGURATION);
}
