//! WMO weather interpretation codes as used by Open-Meteo.

/// Shown for codes the table does not know.
pub const UNKNOWN: &str = "❔ Неизвестная погода ❔";

/// Looks up the description for a WMO code.
pub fn lookup(code: i32) -> Option<&'static str> {
    let text = match code {
        0 => "☀️ Чистое небо ☀️",
        1 => "☀️ В основном ясно ☀️",
        2 => "🌤 Переменная облачность 🌤",
        3 => "🌥 Пасмурная погода 🌥",
        45 => "🌫 Туман 🌫",
        48 => "🌫❄️ Туман с изморозью ❄️🌫",
        51 => "🌧 Моросящий дождь: Легкий 🌧",
        53 => "🌧🌧 Моросящий дождь: Умеренный 🌧🌧",
        55 => "🌧🌧🌧 Моросящий дождь: Густой и интенсивный 🌧🌧🌧",
        56 => "🌧❄️ Ледяной моросящий дождь: Легкий ❄️🌧",
        57 => "🌧❄️🌧 Ледяной моросящий дождь: Густой и интенсивный 🌧❄️🌧",
        61 => "🌧 Дождь: Небольшой 🌧",
        63 => "🌧🌧 Дождь: Умеренный 🌧🌧",
        65 => "🌧🌧🌧 Дождь: Высокая интенсивность 🌧🌧🌧",
        66 => "🌨❄️ Ледяной дождь: Легкий ❄️🌨",
        67 => "🌨❄️🌨 Ледяной дождь: Высокая интенсивность 🌨❄️🌨",
        71 => "❄️ Снег: Небольшой ❄️",
        73 => "❄️❄️ Снег: Умеренный ❄️❄️",
        75 => "❄️❄️❄️ Снег: Высокая интенсивность ❄️❄️❄️",
        77 => "❄️ Снежные крупинки ❄️",
        80 => "🌩 Ливневые дожди: Легкий 🌩",
        81 => "🌩🌩 Ливневые дожди: Умеренный 🌩🌩",
        82 => "🌩🌩🌩 Ливневые дожди: Сильные 🌩🌩🌩",
        85 => "🌨 Снегопад: Легкий 🌨",
        86 => "🌨🌨 Снегопад: Тяжелый 🌨🌨",
        95 => "⚡ Гроза: Слабая или умеренная ⚡",
        96 => "⚡🧊 Гроза со слабым градом 🧊⚡",
        99 => "⚡🧊🧊⚡ Гроза с сильным градом ⚡🧊🧊⚡",
        _ => return None,
    };
    Some(text)
}

/// Like [`lookup`], falling back to [`UNKNOWN`].
pub fn describe(code: i32) -> &'static str {
    lookup(code).unwrap_or(UNKNOWN)
}
