//! Built-in advisory catalog: the Turkish program-choice rules, the fallback
//! pool, the opening greeting and the suggested quick replies.
//!
//! Order matters. The engineering-vs-medicine comparison sits before the
//! single-topic medicine rule so the compound question is not swallowed by it.

use crate::chat::classifier::{MatchMode, Rule, RuleError};

pub const GREETING: &str =
    "Merhaba! Ben BölümBul asistanınızım. Bölüm seçimi hakkında size nasıl yardımcı olabilirim?";

pub const QUICK_REPLIES: &[&str] = &[
    "Özel üniversite mi devlet mi?",
    "Hangi şehirler öğrenci için ekonomik?",
    "Hangi bölümlerin ataması yüksek?",
    "Hangi bölümlerin yurtdışı imkanı var?",
    "En garantili bölümler neler?",
];

pub const FALLBACKS: &[&str] = &[
    "Bu konuda size daha detaylı yardım edebilmem için biraz daha bilgi verebilir misiniz? Örneğin hangi sınıfta okuyorsunuz veya en sevdiğiniz dersler neler?",
    "İlginç bir soru! Size en uygun tavsiyeleri verebilmek için şu bilgileri paylaşabilir misiniz: Güçlü olduğunuz alanlar neler ve gelecekte kendinizi nasıl bir ortamda görüyorsunuz?",
    "Tabii ki yardımcı olabilirim! Daha kişiselleştirilmiş öneriler yapabilmem için ilgi alanlarınız veya merak ettiğiniz bölümler hakkında biraz bilgi verebilir misiniz?",
    "Bu sorunuza en doğru cevabı verebilmek için sizi biraz daha tanımak istiyorum. Akademik durumunuz nasıl ve hangi konular daha çok dikkatinizi çekiyor?",
    "Size yardımcı olmak için buradayım! Daha detaylı bilgi verebilmek için hangi konularda rehberlik beklediğinizi söyleyebilir misiniz? Bölüm seçimi, üniversite karşılaştırması veya kariyer planlaması gibi...",
];

/// Everything the chat surface needs besides the matching engine itself.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub greeting: String,
    pub quick_replies: Vec<String>,
    pub rules: Vec<Rule>,
    pub fallbacks: Vec<String>,
}

impl Catalog {
    pub fn builtin() -> Result<Self, RuleError> {
        let rules = RULES
            .iter()
            .map(|r| Rule::new(r.name, r.mode, r.triggers.iter().copied(), r.response))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Catalog {
            greeting: GREETING.to_string(),
            quick_replies: QUICK_REPLIES.iter().map(|s| s.to_string()).collect(),
            rules,
            fallbacks: FALLBACKS.iter().map(|s| s.to_string()).collect(),
        })
    }
}

struct CatalogRule {
    name: &'static str,
    mode: MatchMode,
    triggers: &'static [&'static str],
    response: &'static str,
}

const RULES: &[CatalogRule] = &[
    CatalogRule {
        name: "salary",
        mode: MatchMode::Any,
        triggers: &["para kazandıran", "maaşı yüksek", "en çok para", "kazanç"],
        response: SALARY,
    },
    CatalogRule {
        name: "engineering_vs_medicine",
        mode: MatchMode::All,
        triggers: &["mühendislik", "tıp"],
        response: ENGINEERING_VS_MEDICINE,
    },
    CatalogRule {
        name: "undecided",
        mode: MatchMode::Any,
        triggers: &["kararsız", "seçemiyorum", "ne seçmeli", "bilmiyorum"],
        response: UNDECIDED,
    },
    CatalogRule {
        name: "top_universities",
        mode: MatchMode::Any,
        triggers: &["hangi üniversite", "en iyi üniversite", "üniversite öner"],
        response: TOP_UNIVERSITIES,
    },
    CatalogRule {
        name: "math_is_hard",
        mode: MatchMode::Any,
        triggers: &["matematik zor", "matematik sevmiyorum", "sayısal zor"],
        response: MATH_IS_HARD,
    },
    CatalogRule {
        name: "campus_life",
        mode: MatchMode::Any,
        triggers: &["üniversite hayatı", "kampüs", "sosyal yaşam"],
        response: CAMPUS_LIFE,
    },
    CatalogRule {
        name: "career_outlook",
        mode: MatchMode::Any,
        triggers: &["iş imkan", "istihdam", "gelecek", "kariyer"],
        response: CAREER_OUTLOOK,
    },
    CatalogRule {
        name: "exam_scores",
        mode: MatchMode::Any,
        triggers: &["yks", "puan", "sınav"],
        response: EXAM_SCORES,
    },
    CatalogRule {
        name: "associate_degrees",
        mode: MatchMode::Any,
        triggers: &["2 yıllık", "önlisans", "meslek yüksekokulu", "myo"],
        response: ASSOCIATE_DEGREES,
    },
    CatalogRule {
        name: "private_vs_state",
        mode: MatchMode::Any,
        triggers: &["özel üniversite", "devlet üniversite", "özel mi devlet mi"],
        response: PRIVATE_VS_STATE,
    },
    CatalogRule {
        name: "greeting",
        mode: MatchMode::Any,
        triggers: &["merhaba", "selam", "hey"],
        response: GREETING_REPLY,
    },
    CatalogRule {
        name: "thanks",
        mode: MatchMode::Any,
        triggers: &["teşekkür", "sağol", "yardım", "güzel"],
        response: THANKS,
    },
    CatalogRule {
        name: "stress",
        mode: MatchMode::Any,
        triggers: &["stres", "kaygı", "korku", "başaramam", "zor"],
        response: STRESS,
    },
    CatalogRule {
        name: "software",
        mode: MatchMode::Any,
        triggers: &["yazılım", "bilgisayar mühendisliği", "programlama", "kod"],
        response: SOFTWARE,
    },
    CatalogRule {
        name: "teaching",
        mode: MatchMode::Any,
        triggers: &["öğretmen", "eğitim fakültesi", "pedagoji", "öğretim"],
        response: TEACHING,
    },
    CatalogRule {
        name: "medicine",
        mode: MatchMode::Any,
        triggers: &["tıp", "doktor", "hekim"],
        response: MEDICINE,
    },
    CatalogRule {
        name: "law",
        mode: MatchMode::Any,
        triggers: &["hukuk", "avukat", "hukukçu"],
        response: LAW,
    },
    CatalogRule {
        name: "business",
        mode: MatchMode::Any,
        triggers: &["işletme", "yönetim", "ekonomi", "iş dünyası"],
        response: BUSINESS,
    },
    CatalogRule {
        name: "affordable_cities",
        mode: MatchMode::Any,
        triggers: &["ekonomik şehir", "ucuz şehir", "hangi şehir", "öğrenci için şehir"],
        response: AFFORDABLE_CITIES,
    },
    CatalogRule {
        name: "appointment_rates",
        mode: MatchMode::Any,
        triggers: &["atama", "atanma", "iş garantisi", "atama oranı"],
        response: APPOINTMENT_RATES,
    },
    CatalogRule {
        name: "study_abroad",
        mode: MatchMode::Any,
        triggers: &["yurtdışı", "yurt dışı", "abroad", "avrupa", "america"],
        response: STUDY_ABROAD,
    },
];

const SALARY: &str = r#"💰 **En Yüksek Maaşlı Bölümler (2024 verileri):**

**Tıp Alanları:** (₺15.000 - ₺50.000+)
• Beyin Cerrahisi, Kalp Cerrahisi, Anestezi
• Radyoloji, Dermatoloji, Göz Hastalıkları

**Mühendislik:** (₺12.000 - ₺35.000)
• Yazılım/Bilgisayar Mühendisliği (özellikle AI/ML)
• Petrol/Maden Mühendisliği
• Endüstri Mühendisliği (büyük şirketlerde)

**Finans/İş Dünyası:** (₺10.000 - ₺40.000+)
• Yatırım Bankacılığı, Risk Yönetimi
• Aktüerya, Ekonometri
• MBA + deneyim kombinasyonu

**Teknoloji:** (₺8.000 - ₺30.000)
• Veri Bilimi, Siber Güvenlik
• DevOps, Cloud Mimarı

⚠️ **Dikkat:** Maaş sadece mesleğe değil, deneyim, şirket ve lokasyona da bağlı. Tutkulu olduğunuz alanı seçerseniz hem daha başarılı olur hem de maaşınız artar!

Hangi alanda çalışmayı hayal ediyorsunuz?"#;

const ENGINEERING_VS_MEDICINE: &str = r#"🏥⚙️ **Mühendislik vs Tıp - Detaylı Karşılaştırma:**

**TIP FAKÜLTESİ:**
✅ **Artıları:**
• Çok prestijli ve saygın meslek
• Yüksek ve garantili gelir (₺15K-50K+)
• İnsanlara doğrudan yardım etme hissi
• İş garantisi (her zaman doktor lazım)

❌ **Eksileri:**
• 6 yıl + 4-6 yıl uzmanlık = 10-12 yıl
• Çok yüksek YKS puanı gerekli (480K+)
• Çok stresli ve yorucu meslek
• Mesai saatleri düzensiz

**MÜHENDİSLİK:**
✅ **Artıları:**
• 4 yıl eğitim, hızlıca iş hayatına
• Çok çeşitli sektör seçenekleri
• Teknoloji ile iç içe (gelişen alan)
• Yaratıcılık + analitik düşünce

❌ **Eksileri:**
• Sürekli kendini güncelleme gerekli
• Bazı dallar doygun (makine, inşaat)
• Maaş başlangıçta düşük olabilir

**KARAR VERMENİZ İÇİN SORULAR:**
1. Matematik/Fizik mi yoksa Biyoloji/Kimya mı daha kolay geliyor?
2. 12 yıl eğitime katlanabilir misiniz?
3. İnsan hayatına dokunmak mı yoksa teknoloji geliştirmek mi daha çekici?

Hangi yönde eğiliminiz var?"#;

const UNDECIDED: &str = r#"🤔 **Bölüm Seçiminde Kararsızlık Çok Normal! Size Rehberlik Edeyim:**

**1. KENDİNİZİ TANIMAK:**
📚 **En sevdiğiniz dersler neler?**
• Matematik-Fizik → Mühendislik, Fen
• Biyoloji-Kimya → Tıp, Eczacılık, Veteriner
• Edebiyat-Tarih → Hukuk, Öğretmenlik, Gazetecilik
• Coğrafya-Sosyal → İşletme, Turizm, Uluslararası İlişkiler

🎯 **2. KİŞİLİK ANALİZİ:**
• **İnsanlarla mı çalışmayı seviyorsunuz?** → Öğretmenlik, Psikoloji, Hukuk
• **Yalnız çalışmayı mı?** → Programlama, Grafik Tasarım, Muhasebe
• **Pratik işler mi teorik mi?** → Mühendislik vs Akademik alanlar

💰 **3. GELECEK HEDEFLERİ:**
• Ne kadar maaş hedefliyorsunuz?
• Hangi şehirde yaşamak istiyorsunuz?
• Kaç yıl eğitim almaya hazırsınız?

**HEMEN YAPILACAKLAR:**
✨ Meslek mensubu tanıdıklarınızla konuşun
✨ Üniversite tanıtım günlerine katılın
✨ YouTube'da "Bir günüm" videolarını izleyin
✨ İnternetten meslek testleri yapın

**Size özel öneri verebilmem için hangi konularda daha güçlüsünüz söyleyebilir misiniz?**"#;

const TOP_UNIVERSITIES: &str = r#"🏛️ **Türkiye'nin En İyi Üniversiteleri (2024 Sıralaması):**

**🥇 SÜPER LİG (Dünya Çapında Tanınan):**
• **Boğaziçi:** İngilizce eğitim, çok güçlü mezun ağı, sosyal bilimler + mühendislik
• **ODTÜ:** Mühendislik + fen bilimleri zirvesi, kampüs yaşamı harika
• **İTÜ:** En köklü teknik üniversite, mühendislik + mimarlık

**🥈 1. LİG (Çok Kaliteli):**
• **Koç/Sabancı:** Özel, İngilizce, küçük sınıflar, burslu eğitim
• **Hacettepe:** Tıp + fen bilimleri güçlü
• **İstanbul Üniversitesi:** Köklü, özellikle tıp + hukuk
• **Gazi:** Öğretmenlik + mühendislik
• **Bilkent:** Teknoloji + işletme

**🥉 BÖLGESEL LİDERLER:**
• **Ege, Dokuz Eylül (İzmir):** Batı'nın kaliteli seçenekleri
• **Erciyes (Kayseri):** Anadolu'nun yükselen yıldızı
• **KTÜ (Trabzon):** Karadeniz'in teknik üniversitesi

**BÖLÜM SEÇİMİ ÖNERİLERİ:**
🔥 **Teknoloji → Boğaziçi, ODTÜ, İTÜ, Bilkent**
🏥 **Tıp → Hacettepe, İÜ, Ege, Akdeniz**
⚖️ **Hukuk → İÜ, Ankara, Marmara, Galatasaray**
🏢 **İşletme → Boğaziçi, Koç, Sabancı, İÜ**

Hangi bölüm alanı sizi daha çok ilgilendiriyor? Size o alana göre detaylı üniversite önerisi yapabilirim!"#;

const MATH_IS_HARD: &str = r#"📚 **Matematik Zorlanıyorsanız Panik Yok! Birçok Harika Seçenek Var:**

**🎨 SOSYAL VE SANAT ALANLARI:**
• **Hukuk:** Mantıklı düşünme yetisi yeterli, matematik minimal
• **Psikoloji:** İnsan davranışları, istatistik temel düzeyde
• **Türk Dili ve Edebiyatı:** Yaratıcılık + dil becerileri
• **Tarih:** Araştırma + analiz yeteneği
• **Gazetecilik:** İletişim + güncel olayları takip

**💼 İŞ DÜNYASI (Az Matematik):**
• **İşletme:** Temel matematik, daha çok strateji
• **Uluslararası İlişkiler:** Dil + diplomasi
• **Turizm İşletmeciliği:** İnsan ilişkileri + organizasyon
• **Reklamcılık:** Yaratıcılık + pazarlama

**🏥 SAĞLIK (Biyoloji Ağırlıklı):**
• **Hemşirelik:** Tıbbi bilgi + hasta bakımı
• **Fizyoterapi:** Anatomi + rehabilitasyon
• **Beslenme ve Diyetetik:** Sağlık + beslenme bilimi

**🎭 SANAT VE TASARIM:**
• **Grafik Tasarım:** Yaratıcılık + teknoloji
• **İç Mimarlık:** Estetik + fonksiyonellik
• **Müzik/Resim:** Sanatsal yetenek

**💡 ÖNEMLİ NOT:** Matematik zorlanmanız başarısız olacağınız anlamına gelmez! Birçok başarılı hukukçu, gazeteci, psikolog matematik konusunda zorlanmıştı.

**Hangi alanlar daha çok ilginizi çekiyor? Detayına inelim!**"#;

const CAMPUS_LIFE: &str = r#"🎓 **Üniversite Hayatı ve Kampüs Rehberi:**

**🏕️ EN İYİ KAMPÜS YAŞAMI:**
• **ODTÜ:** 4500 dönüm orman içi, bisiklet yolları, çok aktif öğrenci kulüpleri
• **Boğaziçi:** Boğaz manzarası, tarihi yapılar, şehir merkezine yakın
• **İTÜ:** Şehir kampüsü, sosyal aktiviteler bol
• **Bilkent:** Modern kampüs, spor tesisleri

**🎉 SOSYAL AKTİVİTELER:**
• **Öğrenci kulüpleri:** Dans, müzik, spor, teknoloji...
• **Festivaller:** ODTÜ Kültür Festival, Boğaziçi Bahar Şenlikleri
• **Spor:** Futbol, basketbol, yüzme havuzları
• **Konserler ve etkinlikler**

**🏠 BARINMA SEÇENEKLERİ:**
• **Devlet yurdu:** En ucuz (₺200-500/ay)
• **Özel yurt:** Daha konforlu (₺800-2000/ay)
• **Ev paylaşımı:** Arkadaşlarla (₺1000-3000/ay)
• **Ailede kalma:** Şehir içi üniversiteler

**💰 AYLIK GİDERLER (Ortalama):**
• Yemek: ₺1500-3000
• Ulaşım: ₺200-500
• Sosyal aktivite: ₺500-1500
• Kırtasiye: ₺200-400

**📚 AKADEMİK HAYAT:**
• Dersler genelde sabah 8-akşam 6 arası
• Ödevler, projeler, sınavlar
• Hocalarla ofis saatleri
• Kütüphane çalışması

Hangi şehirde üniversite okumayı planlıyorsunuz?"#;

const CAREER_OUTLOOK: &str = r#"🚀 **2024-2030 Arası En Çok İş İmkanı Olan Alanlar:**

**📱 TEKNOLOJİ (Çok Yüksek Talep):**
• **Yapay Zeka/Makine Öğrenmesi:** Maaş ₺15K-40K
• **Siber Güvenlik Uzmanı:** Çok aranıyor, ₺12K-35K
• **Veri Bilimci:** Her sektörde gerekli, ₺10K-30K
• **Mobil/Web Developer:** Freelance imkanı da var
• **DevOps/Cloud:** Infrastructure uzmanları

**🏥 SAĞLIK (Sürekli İhtiyaç):**
• **Hemşire:** Avrupa'da da çalışma imkanı
• **Fizyoterapist:** Yaşlanan nüfus, spor sektörü
• **Beslenme Uzmanı:** Sağlıklı yaşam trendi
• **Tıbbi Sekreter:** Hastanelerde çok aranıyor

**🎓 EĞİTİM (Garantili İstihdam):**
• **Matematik/Fen Öğretmeni:** Her zaman açık var
• **İngilizce Öğretmeni:** Özel sektörde de geçerli
• **Okul Öncesi Öğretmeni:** 0-6 yaş eğitimi zorunlu

**💼 İŞ DÜNYASI:**
• **Dijital Pazarlama:** E-ticaret büyüyor
• **İnsan Kaynakları:** Her şirkette gerekli
• **Satış Uzmanı:** Deneyimle çok iyi maaş
• **Muhasebe:** TÜRMOB sertifikası ile garanti

**🌱 YENİ SEKTÖRLER:**
• **Çevre Mühendisliği:** Sürdürülebilirlik trendi
• **Yenilenebilir Enerji:** Güneş, rüzgar santralleri
• **E-spor:** Oyun sektörü büyüyor
• **İçerik Üretimi:** YouTube, sosyal medya

**💡 TAVSİYE:** Hangi bölümü seçerseniz seçin, kendinizi sürekli geliştirin. Sertifikalar alın, staj yapın, network kurun!

Hangi sektör daha çok ilginizi çekiyor?"#;

const EXAM_SCORES: &str = r#"📊 **YKS 2024 Puan Rehberi ve Strateji:**

**🎯 PUAN ARALIĞI STRATEJİLERİ:**

**🥇 SÜPER LİG (450K+ Puan):**
• Boğaziçi, ODTÜ, İTÜ tıp/mühendislik
• Günde 8-10 saat çalışma gerekli
• **Strateji:** AYT'ye ağırlık, TYT'yi sağlama alın

**🥈 1. LİG (300K-450K):**
• İyi devlet üniversiteleri, güzel bölümler
• Günde 6-8 saat düzenli çalışma
• **Strateji:** Dengeli çalışma, eksik konuları kapatın

**🥉 2. LİG (150K-300K):**
• Devlet üniversiteleri, 2 yıllık programlar
• Günde 4-6 saat çalışma
• **Strateji:** TYT'ye odaklanın, temel konuları sağlamlaştırın

**📚 ÇALIŞMA TAKVİMİ:**
• **Eylül-Ocak:** Konu anlatım + soru çözümü
• **Şubat-Nisan:** Deneme sınavları + eksik kapatma
• **Mayıs-Haziran:** Son tekrar + psikolojik hazırlık

**📈 PUAN ARTIRMA İPUÇLARI:**
✅ **TYT'de 100+ doğru** yapın (çok kritik!)
✅ **Matematik-Fen** ağırlık verin (katsayı yüksek)
✅ **Deneme sınavları** düzenli çözün
✅ **Zayıf dersleri** ihmal etmeyin
✅ **Soru bankası** + **video dersler** kombinasyonu

**⚠️ ÖNEMLİ:** Hedef belirlemek motivasyon sağlar! Hangi puan aralığını hedefliyorsunuz? Size uygun strateji önerebilirim.

Şu anki durumunuz nasıl? Hangi derslerde zorlanıyorsunuz?"#;

const ASSOCIATE_DEGREES: &str = r#"🎓 **Önlisans/Meslek Yüksekokulu - Hızlıca İş Hayatına Atılın!**

**💼 EN POPÜLER VE İŞ GARANTİLİ BÖLÜMLER:**

**💻 BİLİŞİM TEKNOLOJİLERİ:**
• **Bilgisayar Programcılığı:** Web/mobil geliştirme
• **Bilişim Güvenliği:** Siber güvenlik uzmanı
• **Veri Tabanı Yönetimi:** SQL, veri analizi
• **Maaş:** ₺6K-20K (deneyimle artıyor)

**🏥 SAĞLIK HİZMETLERİ:**
• **Anestezi Teknisyeni:** Ameliyathane ekibi
• **Tıbbi Görüntüleme:** Röntgen, MR teknisyeni
• **Laboratuvar Teknisyeni:** Tahlil yapma
• **Maaş:** ₺5K-15K + devlet garantisi

**⚙️ TEKNİK ALANLAR:**
• **Makine Teknolojisi:** Üretim sektörü
• **Elektrik-Elektronik:** Enerji, telekomünikasyon
• **Otomotiv Teknolojisi:** Servis, üretim
• **İnşaat Teknolojisi:** Şantiye yönetimi

**💰 TİCARET VE YÖNETİM:**
• **Dış Ticaret:** İhracat-ithalat firmaları
• **Lojistik:** Kargo, depolama şirketleri
• **Muhasebe:** Her şirkette gerekli
• **Bankacılık:** Şube operasyonları

**✅ ÖNLİSANS AVANTAJLARI:**
• 2 yıl eğitim → Hızlıca iş hayatına
• Daha pratik, uygulamalı eğitim
• Staj zorunluluğu → İş bağlantıları
• Daha düşük puan ile giriş
• Çalışırken DGS ile lisans tamamlama

**📈 BAŞARILI OLMAK İÇİN:**
• Stajı ciddiye alın
• Sertifikalar edinin
• Sektörel fuarlara katılın
• Network kurun

Hangi alan daha çok ilginizi çekiyor?"#;

const PRIVATE_VS_STATE: &str = r#"🏛️ **Özel vs Devlet Üniversitesi - Detaylı Karşılaştırma:**

**🎓 DEVLET ÜNİVERSİTESİ:**
✅ **Artıları:**
• **Çok düşük harç:** Yılda sadece ₺1000-2000
• **Prestijli olanlar var:** ODTÜ, Boğaziçi, İTÜ
• **Geniş kampüs:** Sosyal aktiviteler, kulüpler
• **Çok öğrenci:** Geniş arkadaş çevresi
• **Araştırma imkanları:** Akademik kariyer için ideal

❌ **Eksileri:**
• **Kalabalık sınıflar:** 200-300 kişilik dersler
• **Hoca ilgisi sınırlı:** Bireysel takip zor
• **Bürokrasi:** İşlemler uzun sürebilir
• **Eskimiş alt yapı:** Bazı üniversitelerde

**🏢 ÖZEL ÜNİVERSİTE:**
✅ **Artıları:**
• **Küçük sınıflar:** 20-40 kişi, bireysel ilgi
• **Modern donanım:** Son teknoloji laboratuvarlar
• **İngilizce eğitim:** Uluslararası fırsatlar
• **Sektör bağlantıları:** İş imkanları daha kolay
• **Hızlı mezuniyet:** Müfredat optimize
• **Burs imkanları:** %25-100 burs olanakları

❌ **Eksileri:**
• **Yüksek maliyet:** Yılda ₺30K-150K
• **Prestij farkı:** Bazıları pek tanınmıyor
• **Sınırlı kampüs:** Sosyal aktiviteler az olabilir

**💰 MALİYET KARŞILAŞTIRMASI (4 yıl):**
• **Devlet:** ₺5K-10K (sadece harç)
• **Özel (burslu):** ₺30K-100K
• **Özel (burssuz):** ₺120K-600K

**🎯 HANGİSİNİ SEÇMELİSİNİZ?**

**Devlet üniversitesi seçin eğer:**
• Bütçeniz kısıtlı
• Prestijli bir bölüme girebiliyorsanız
• Akademik kariyer planlıyorsanız
• Sosyal yaşam önemli

**Özel üniversite seçin eğer:**
• Burs alabiliyorsanız
• Bireysel ilgi istiyorsanız
• İş dünyasına hızlıca atılmak istiyorsanız
• İngilizce eğitim önceliğiniz

Bütçeniz ve hedefleriniz neler?"#;

const GREETING_REPLY: &str = r#"Merhaba! 😊 BölümBul asistanınız olarak size yardım etmekten mutluluk duyarım.

**Size nasıl yardımcı olabilirim?**
🎓 Bölüm seçimi danışmanlığı
🏛️ Üniversite karşılaştırmaları
💰 Maaş ve kariyer bilgileri
📊 YKS strateji önerileri
🤔 Kararsızlık çözümleri

Hangi konuda kafanızda soru işaretleri var?"#;

const THANKS: &str = r#"Çok memnun oldum yardımcı olabildiysem! 🌟

Bölüm seçimi çok önemli bir karar ve doğru bilgiyle hareket etmeniz harika. Başka sorularınız olduğunda çekinmeyin.

**Unutmayın:** En iyi bölüm, sizin yetenekleriniz ve tutkularınızla uyumlu olandır. Size başarılar diliyorum! 🚀

Başka merak ettiğiniz bir konu var mı?"#;

const STRESS: &str = r#"💪 **Stres ve Kaygılarınız Çok Normal! Beraber Çözelim:**

**🧠 BÖLÜM SEÇİMİ STRESI:**
Her gencin yaşadığı doğal bir süreç. Kendinizi yalnız hissetmeyin!

**✨ STRESİ AZALTMAK İÇİN:**
• **Bilgi edinin:** Belirsizlik stresi artırır
• **Küçük adımlar atın:** Büyük hedefi parçalayın
• **Konuşun:** Aile, öğretmen, arkadaşlarla paylaşın
• **Zamanınız var:** Aceleniz yok, düşünme fırsatınız çok

**🎯 DOĞRU BAKIŞ AÇISI:**
• "Mükemmel" seçim yoktur, "uygun" seçim vardır
• Hata yaparsanız da düzeltilebilir (yatay geçiş, çift anadal)
• Başarı = doğru seçim + çaba + tutku
• Her bölümden başarılı insanlar çıkıyor

**🌟 MOTİVASYON:**
Siz bu karaarı verebilecek kapasitedesiniz! Kendine güven ve adım adım ilerleyin.

Ne konuda en çok kaygı duyuyorsunuz? Beraber çözüm bulalım."#;

const SOFTWARE: &str = r#"💻 **Yazılım ve Bilgisayar Mühendisliği - Detaylı Rehber:**

**🚀 NEDEN BU ALAN?**
• En hızla büyüyen sektör (her yıl %15+ büyüme)
• Remote çalışma imkanı (dünyanın her yerinden)
• Sürekli öğrenme ve gelişim
• Yaratıcılık + mantık birleşimi

**🎓 EĞİTİM SEÇENEKLERİ:**
• **Bilgisayar Mühendisliği:** Daha teorik, algorithm ağırlıklı
• **Yazılım Mühendisliği:** Daha pratik, proje odaklı
• **Bilgisayar Programcılığı (2 yıllık):** Hızlıca iş hayatına

**💼 ÇALIŞMA ALANLARI:**
• **Frontend Developer:** Kullanıcı arayüzleri (React, Vue)
• **Backend Developer:** Sunucu tarafı (Node.js, Python, Java)
• **Mobile Developer:** Mobil uygulamalar (iOS, Android)
• **Game Developer:** Oyun geliştirme (Unity, Unreal)
• **AI/ML Engineer:** Yapay zeka, veri bilimi
• **DevOps Engineer:** Sistem yönetimi, cloud

**💰 MAAŞ BEKLENTİLERİ:**
• **Junior (0-2 yıl):** ₺8K-15K
• **Mid-level (2-5 yıl):** ₺15K-25K
• **Senior (5+ yıl):** ₺25K-40K+
• **Tech Lead/Architect:** ₺40K-60K+

**📚 ÖĞRENMENİZ GEREKENLER:**
• **Temel:** HTML, CSS, JavaScript
• **Backend:** Python, Java, C# seçeneklerinden biri
• **Database:** SQL, NoSQL
• **Versiyon Kontrol:** Git/GitHub
• **Cloud:** AWS, Google Cloud basics

**🏆 BAŞARILI OLMAK İÇİN:**
• Sürekli practice yapın (LeetCode, HackerRank)
• GitHub'da proje portföyü oluşturun
• Open source projelere katkıda bulunun
• Teknoloji topluluklarına katılın

Programlama deneyiminiz var mı? Hangi alanda uzmanlaşmak istiyorsunuz?"#;

const TEACHING: &str = r#"👨‍🏫 **Öğretmenlik - Geleceği Şekillendiren Meslek:**

**🌟 NEDEN ÖĞRETMENLİK?**
• Topluma doğrudan katkı
• İş garantisi (her zaman öğretmen ihtiyacı var)
• Düzenli mesai (tatiller guaranteed!)
• Maaş güvencesi + yan haklar
• Her gün yeni deneyimler

**📚 ÖĞRETMENLİK ALANLARI:**

**🔬 FEN BİLİMLERİ (Çok Aranıyor!):**
• **Matematik Öğretmenliği:** En çok açık olan alan
• **Fizik Öğretmenliği:** Lise düzeyinde yüksek maaş
• **Kimya/Biyoloji:** Laboratuvar imkanları

**🗣️ SOSYAL VE DİL:**
• **İngilizce Öğretmenliği:** Özel sektörde de çalışabilir
• **Türkçe Öğretmenliği:** Edebiyat severlere ideal
• **Tarih/Coğrafya:** Sosyal bilimler meraklıları

**🎨 ÖZEL ALANLAR:**
• **Okul Öncesi:** 0-6 yaş, çok sabır gerekli ama çok sevimli
• **Özel Eğitim:** Engelli bireylerle çalışma, çok anlamlı
• **Rehber Öğretmen:** Psikolojik danışmanlık

**💰 MAAŞ VE HAKLAR:**
• **Başlangıç:** ₺17.000 (2024)
• **Kıdemli:** ₺25.000+
• **Ek dersler:** +₺3.000-8.000
• **Tatiller:** Yaz, kış, sömestr tatilleri
• **Emeklilik:** 25 yıl hizmet

**📊 ATANMA DURUMLARI (2024):**
• **En kolay atanan:** Matematik, Fen, İngilizce
• **Orta zorluk:** Türkçe, Sosyal Bilimler
• **En zor:** Sınıf öğretmenliği, Okul öncesi

**✅ ÖĞRETMENLİK İÇİN GEREKLİ ÖZELLİKLER:**
• Sabırlı ve anlayışlı olma
• İletişim becerisi güçlü olma
• Sürekli öğrenmeye açık olma
• Liderlik ve organizasyon yetisi

**🎯 ALTERNATIF KARIYERLER:**
• Özel okullarda çalışma
• Dershane/etüt merkezi
• Online eğitim platformları
• Eğitim danışmanlığı
• Akademisyen olma

Hangi yaş grubu ve alan daha çok ilginizi çekiyor?"#;

const MEDICINE: &str = r#"🏥 **Tıp Fakültesi - En Prestijli Meslek Yolu:**

**⚕️ TIP FAKÜLTESİ SÜRECİ:**
• **6 yıl temel eğitim** (preklinik + klinik)
• **TUS sınavı** (uzmanlık için)
• **4-6 yıl uzmanlık** (dal seçimine göre)
• **Toplam süre:** 10-12 yıl

**📊 GİRİŞ ŞARTLARI (2024):**
• **YKS Puanı:** 480.000+ (en düşük devlet)
• **TYT:** En az 150+ doğru
• **AYT Fen:** En az 35+ doğru
• **Dil puanı:** Bazı üniversitelerde ek puan

**🏥 UZMANLIK ALANLARI VE MAAŞLARI:**

**💰 YÜKSEK MAAŞLI ALANLAR:**
• **Beyin Cerrahisi:** ₺40K-100K+
• **Kalp Cerrahisi:** ₺35K-80K
• **Plastik Cerrahi:** ₺30K-70K
• **Radyoloji:** ₺25K-60K
• **Anestezi:** ₺25K-55K

**🩺 ORTA MAAŞLI ALANLAR:**
• **Dahiliye:** ₺20K-40K
• **Pediatri:** ₺18K-35K
• **Kadın Doğum:** ₺20K-45K
• **Göz Hastalıkları:** ₺22K-50K

**👨‍⚕️ DİĞER ALANLAR:**
• **Aile Hekimliği:** ₺15K-25K (En kolay atanma)
• **Acil Tıp:** ₺18K-30K
• **Psikiyatri:** ₺17K-35K

**📚 EĞİTİM SÜRECİ:**
• **1-3. sınıf:** Temel bilimler (anatomi, fizyoloji)
• **4-6. sınıf:** Klinik dersler (hastane stajları)
• **İnternlik:** 1 yıl pratik deneyim
• **TUS:** Uzmanlık sınavı (%15 başarı oranı)

**✅ TIP İÇİN GEREKLİ ÖZELLİKLER:**
• Güçlü fen bilimleri (özellikle biyoloji, kimya)
• Yüksek stres toleransı
• Empati ve iletişim becerisi
• Uzun süreli eğitime sabır
• Sürekli öğrenme isteği

**⚠️ ZORLUKLAR:**
• Çok uzun eğitim süreci
• Yoğun müfredat ve ezberlemek
• Nöbet sistemi (düzensiz mesai)
• Yüksek sorumluluk ve stres
• TUS sınavının zorluğu

**🌍 ALTERNATİF SEÇENEKLER:**
• **Diş Hekimliği:** 5 yıl, daha az rekabet
• **Veteriner Hekim:** 5 yıl, hayvan sevgisi gerekli
• **Eczacılık:** 5 yıl, ilaç sektörü

Tıp alanında hangi uzmanlık dalları sizi daha çok ilgilendiriyor?"#;

const LAW: &str = r#"⚖️ **Hukuk Fakültesi - Adaletin Bekçileri:**

**📚 HUKUK EĞİTİMİ:**
• **4 yıl lisans** eğitimi
• **Staj:** 1 yıl avukatlık stajı
• **Avukatlık Sınavı:** Baro'ya kayıt için gerekli
• **Alternatif:** Hakim/Savcı için ayrı sınav

**⚖️ ÇALIŞMA ALANLARI:**

**💼 ÖZEL SEKTÖR:**
• **Şirket Hukuk Müşaviri:** ₺15K-40K
• **Bağımsız Avukat:** ₺8K-50K+ (müvekkil sayısına göre)
• **Hukuk Bürosu Ortağı:** ₺25K-100K+
• **Şirketlerde Legal:** ₺12K-30K

**🏛️ KAMU SEKTÖRÜ:**
• **Hakim:** ₺18K-35K + yan haklar
• **Savcı:** ₺18K-35K + yan haklar
• **Kaymakam/Vali:** İdari kariyer
• **Müfettiş:** Denetim alanları

**🏢 UZMANLIK ALANLARI:**
• **Ticaret Hukuku:** Şirket işlemleri, M&A
• **Ceza Hukuku:** Suç ve ceza davaları
• **Medeni Hukuk:** Aile, miras, kişilik hakları
• **İş Hukuku:** Çalışan hakları, işten çıkarma
• **Vergi Hukuku:** Mali müşavirlikle birlikte
• **Uluslararası Hukuk:** Global şirketler

**📊 BAŞARI FAKTÖRLERI:**
• **Güçlü Türkçe:** Yazma ve konuşma
• **Analitik düşünce:** Kanun maddelerini yorumlama
• **Araştırma becerisi:** İçtihat, doktrin tarama
• **İkna kabiliyeti:** Mahkemede savunma
• **Sabır:** Davalar uzun sürebilir

**💰 GELİR BEKLENTİLERİ:**
• **Yeni mezun:** ₺8K-15K (stajyer)
• **3-5 yıl deneyim:** ₺15K-25K
• **Deneyimli avukat:** ₺25K-50K
• **Tanınmış avukat:** ₺50K-200K+

**🎓 EN İYİ HUKUK FAKÜLTELERİ:**
• **İstanbul Üniversitesi:** En köklü, prestijli
• **Ankara Üniversitesi:** Kamu hukuku güçlü
• **Marmara Üniversitesi:** İyi mezun ağı
• **Galatasaray:** Fransızca eğitim
• **Boğaziçi:** Uluslararası perspektif

**⚠️ SEKTÖRÜN ZORLUKLARI:**
• Yoğun rekabet (çok sayıda mezun)
• İlk yıllarda düşük gelir
• Stresli davalar ve müvekkiller
• Sürekli kanun değişiklikleri takibi

**🚀 BAŞARILI OLMAK İÇİN:**
• Staj döneminde iyi mentör bulun
• Networking'e önem verin
• Uzmanlık alanı seçin
• Sürekli kendinizi güncelleyin
• İkinci dil öğrenin (özellikle İngilizce)

Hangi hukuk alanı daha çok ilginizi çekiyor?"#;

const BUSINESS: &str = r#"💼 **İşletme ve İş Dünyası - Geniş Kariyer İmkanları:**

**🏢 İŞLETME FAKÜLTESİ BÖLÜMLER:**

**📊 İŞLETME (En Popüler):**
• **Pazarlama:** Marka yönetimi, dijital pazarlama
• **Finans:** Yatırım, risk yönetimi, bankacılık
• **İnsan Kaynakları:** Personel, eğitim, performans
• **Operasyon:** Üretim, lojistik, kalite yönetimi
• **Girişimcilik:** Startup kurma, inovasyon

**💰 EKONOMİ:**
• Daha teorik ve analitik
• Ekonomi politikaları, makro/mikro analiz
• Bankacılık, kamu sektörü, akademi

**📈 ULUSLARARASI TİCARET:**
• İhracat-ithalat, gümrük işlemleri
• Global pazarlara açılım
• Dış ticaret şirketleri

**💵 ÇALIŞMA ALANLARI VE MAAŞLAR:**

**🏦 BANKACILIK:**
• **Giriş seviye:** ₺8K-12K
• **Şef/Müdür yardımcısı:** ₺15K-25K
• **Şube müdürü:** ₺25K-40K
• **Bölge müdürü:** ₺40K-80K

**📱 PAZARLAMA:**
• **Junior Marketer:** ₺7K-12K
• **Marketing Specialist:** ₺12K-20K
• **Brand Manager:** ₺20K-35K
• **Marketing Director:** ₺35K-60K

**👥 İNSAN KAYNAKLARI:**
• **HR Specialist:** ₺8K-15K
• **HR Business Partner:** ₺15K-25K
• **HR Director:** ₺25K-45K

**💼 YÖNETİM DANIŞMANLIĞI:**
• **Analyst:** ₺12K-20K
• **Consultant:** ₺20K-35K
• **Senior Consultant:** ₺35K-60K
• **Partner:** ₺60K-150K+

**🚀 GİRİŞİMCİLİK:**
• Kendi işinizi kurma
• Startup ekosistemi
• Risk sermayesi
• E-ticaret platformları

**📚 EĞİTİM İÇERİĞİ:**
• **Temel dersler:** Matematik, istatistik, ekonomi
• **Uzmanlık:** Pazarlama, finans, muhasebe
• **Beceriler:** Liderlik, proje yönetimi
• **Stajlar:** Şirketlerde deneyim

**✅ BAŞARILI OLMAK İÇİN GEREKLİLER:**
• İletişim becerileri güçlü
• Analitik düşünme
• Liderlik potansiyeli
• Takım çalışması
• Sürekli öğrenme isteği

**🎓 EN İYİ İŞLETME FAKÜLTELERİ:**
• **Boğaziçi:** En prestijli, uluslararası tanınırlık
• **Koç Üniversitesi:** Güçlü mezun ağı
• **Sabancı:** İnovatif yaklaşım
• **İÜ İktisat:** Köklü ve saygın
• **ODTÜ:** Analitik yaklaşım

**💡 BONUS İPUÇLARI:**
• İkinci dil çok önemli (İngilizce şart)
• Staj döneminde network kurun
• Sertifikalar edinin (Google Analytics, PMP vs.)
• Case study çalışmaları yapın

İş dünyasının hangi alanı daha çok ilginizi çekiyor?"#;

const AFFORDABLE_CITIES: &str = r#"🏙️ **Öğrenci için En Ekonomik Şehirler:**

**💰 EN UCUZ ŞEHİRLER:**
• **Kayseri:** Barınma ₺800-1500, yemek ₺1200-2000
• **Eskişehir:** Barınma ₺1000-1800, yemek ₺1500-2500
• **Konya:** Barınma ₺700-1300, yemek ₺1000-1800
• **Sivas:** Barınma ₺600-1200, yemek ₺1000-1600
• **Afyon:** Barınma ₺650-1100, yemek ₺900-1500

**🎯 ORTA SEVİYE (İyi Kalite/Fiyat):**
• **Trabzon:** Deniz kenarı, canlı şehir ₺1200-2200
• **Bursa:** İstanbul'a yakın ₺1300-2500
• **Denizli:** Güney Ege ₺1000-1800
• **Sakarya:** İstanbul'a 1 saat ₺1100-2000
• **Kocaeli:** Sanayi şehri, iş imkanı ₺1400-2600

**💸 PAHALIYA KAÇANLAR (Kaçının):**
• **İstanbul:** ₺2500-5000+ (çok pahalı)
• **Ankara:** ₺2000-3500
• **İzmir:** ₺1800-3200
• **Antalya:** ₺1600-3000

**🏠 MALİYET KARŞILAŞTIRMASI (Aylık):**
• **Yurt:** ₺500-2000
• **Ev paylaşımı:** ₺800-2500
• **Özel yurt:** ₺1200-3000
• **Yemek:** ₺1000-2500
• **Ulaşım:** ₺150-400

**💡 TAVSİYE:** Ekonomik şehirler tercih ederseniz 4 yılda ₺50.000-100.000 tasarruf edebilirsiniz!

Hangi bölgeyi düşünüyorsunuz?"#;

const APPOINTMENT_RATES: &str = r#"👨‍💼 **Atama Oranı En Yüksek Bölümler (2024):**

**🥇 %90+ ATAMA ORANI:**
• **Matematik Öğretmenliği:** %95+ (Çok aranıyor!)
• **Fen Bilgisi Öğretmenliği:** %92+
• **Fizik Öğretmenliği:** %90+
• **İngilizce Öğretmenliği:** %88+

**🏥 SAĞLIK ALANLARI (%85+):**
• **Hemşirelik:** %95+ (Avrupa'da da çalışabilir)
• **Ebe:** %90+
• **Fizyoterapist:** %85+
• **Diyetisyen:** %80+

**⚖️ KAMU GÖREVLİLİĞİ:**
• **Hukuk:** %70+ (KPSS ile)
• **İktisat:** %65+ (Maliye, hazine)
• **Kamu Yönetimi:** %75+
• **Maliye:** %70+

**🔧 TEKNİK ALANLAR:**
• **Elektrik Mühendisliği:** %80+ (Enerji sektörü)
• **İnşaat Mühendisliği:** %75+ (Devlet yatırımları)
• **Makine Mühendisliği:** %70+

**📊 EN DÜŞÜK ATAMA ORANLARI:**
• **Sınıf Öğretmenliği:** %15-20 (Çok doygun!)
• **Okul Öncesi:** %25-30
• **Türkçe Öğretmenliği:** %30-35
• **Tarih Öğretmenliği:** %20-25

**💡 ATAMA STRATEJİLERİ:**
• **Doğu illeri tercihi:** +%20-30 şans
• **Ek sertifikalar:** Bilgisayar, yabancı dil
• **Lisansüstü:** Ek puan kazandırır
• **Staj deneyimi:** Özel sektör backup

**⚠️ ÖNEMLİ:** Atama oranları yıllık değişebilir. İhtiyaç analizi yapıp ona göre tercih yapın!

Hangi alanda güvenceli iş arıyorsunuz?"#;

const STUDY_ABROAD: &str = r#"🌍 **Yurtdışı İmkanı En Yüksek Bölümler:**

**💻 TEKNOLOJI (Çok Yüksek Talep):**
• **Yazılım/Bilgisayar Mühendisliği:** ABD, Kanada, Almanya
• **Veri Bilimi:** Dünyanın her yerinde aranıyor
• **Siber Güvenlik:** Özellikle AB ülkelerinde
• **Yapay Zeka/ML:** Silicon Valley, Londra

**🏥 SAĞLIK (Garantili Geçiş):**
• **Hemşirelik:** Almanya, İngiltere, Kanada (dil sertifikası ile)
• **Fizyoterapist:** AB ülkeleri, Avustralya
• **Diş Hekimi:** ABD, Kanada (denklik sınavı ile)
• **Tıp:** Her yerde (uzmanlık denkliği gerekli)

**🏗️ MÜHENDİSLİK:**
• **İnşaat Mühendisliği:** Körfez ülkeleri, Almanya
• **Elektrik Mühendisliği:** Almanya, Hollanda
• **Makine Mühendisliği:** Otomotiv sektörü (Almanya)
• **Petrol Mühendisliği:** Körfez, Norveç, Kanada

**🎓 AKADEMİK KARIYER:**
• **PhD + Araştırma:** ABD, İngiltere, Almanya
• **Mühendislik + MBA:** Global şirketler
• **Yabancı Dil Öğretmenliği:** AB programları

**📈 İŞ DÜNYASI:**
• **İşletme/MBA:** Multinational şirketler
• **Finans/Ekonomi:** Londra, New York, Singapur
• **Uluslararası İlişkiler:** BM, AB, büyükelçilikler

**🗺️ EN POPÜLER ÜLKELER:**
• **Almanya:** Mühendislik, sağlık (ücretsiz eğitim)
• **Kanada:** Teknoloji, sağlık (göçmen dostu)
• **Hollanda:** Mühendislik, işletme (İngilizce eğitim)
• **ABD:** Teknoloji, akademi (yüksek maaş)
• **İngiltere:** Finans, hukuk (kısa eğitim)

**🎯 HAZIRLIK STRATEJİSİ:**
• **İngilizce:** IELTS/TOEFL minimum 6.5-7.0
• **İkinci dil:** Almanca, Fransızca avantaj
• **Uluslararası sertifikalar:** Cisco, AWS, Google
• **Erasmus:** Üniversitede değişim programı
• **Staj:** Yurtdışı şirketlerde deneyim

**💰 MAAŞ BEKLENTİLERİ (Net):**
• **Yazılımcı (Almanya):** €45K-80K/yıl
• **Hemşire (İngiltere):** £25K-40K/yıl
• **Mühendis (Kanada):** CAD 60K-100K/yıl

Hangi ülke/sektör daha çok ilginizi çekiyor?"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::classifier::{Classifier, MatchSource};
    use crate::chat::selector::FallbackSelector;
    use std::sync::Arc;

    struct FirstSelector;

    impl FallbackSelector for FirstSelector {
        fn select(&self, _len: usize) -> usize {
            0
        }
    }

    fn classifier() -> Classifier {
        let catalog = Catalog::builtin().unwrap();
        Classifier::new(catalog.rules, catalog.fallbacks, Arc::new(FirstSelector)).unwrap()
    }

    fn rule_for(c: &Classifier, query: &str) -> Option<String> {
        c.classify_with_decision(query)
            .source
            .rule_name()
            .map(str::to_string)
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.rules.len(), 21);
        assert_eq!(catalog.fallbacks.len(), 5);
        assert_eq!(catalog.quick_replies.len(), 5);
        assert!(!catalog.greeting.is_empty());
    }

    #[test]
    fn test_rule_names_are_unique() {
        let catalog = Catalog::builtin().unwrap();
        let mut names: Vec<&str> = catalog.rules.iter().map(|r| r.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), catalog.rules.len());
    }

    #[test]
    fn test_builtin_catalog_has_no_shadowed_rules() {
        assert!(classifier().shadowed_rules().is_empty());
    }

    #[test]
    fn test_greeting_and_thanks() {
        let c = classifier();
        assert_eq!(rule_for(&c, "Selam, nasılsın?").as_deref(), Some("greeting"));
        assert_eq!(rule_for(&c, "çok teşekkür ederim").as_deref(), Some("thanks"));
    }

    #[test]
    fn test_compound_comparison_beats_single_topic() {
        let c = classifier();
        assert_eq!(
            rule_for(&c, "Mühendislik mi tıp mi?").as_deref(),
            Some("engineering_vs_medicine")
        );
        assert_eq!(rule_for(&c, "tıp okumak istiyorum").as_deref(), Some("medicine"));
    }

    #[test]
    fn test_ascii_uppercase_query_matches() {
        let c = classifier();
        assert_eq!(rule_for(&c, "MATEMATIK ZOR").as_deref(), Some("math_is_hard"));
        assert_eq!(c.classify("MATEMATIK ZOR"), c.classify("matematik zor"));
    }

    #[test]
    fn test_quick_replies_resolve_in_declaration_order() {
        let c = classifier();
        assert_eq!(
            rule_for(&c, "Özel üniversite mi devlet mi?").as_deref(),
            Some("private_vs_state")
        );
        // "ekonomik" contains the earlier business trigger "ekonomi".
        assert_eq!(
            rule_for(&c, "Hangi şehirler öğrenci için ekonomik?").as_deref(),
            Some("business")
        );
        assert_eq!(
            rule_for(&c, "Hangi bölümlerin ataması yüksek?").as_deref(),
            Some("appointment_rates")
        );
        assert_eq!(
            rule_for(&c, "Hangi bölümlerin yurtdışı imkanı var?").as_deref(),
            Some("study_abroad")
        );
        assert_eq!(rule_for(&c, "En garantili bölümler neler?"), None);
    }

    #[test]
    fn test_digits_fall_back_to_pool() {
        let c = classifier();
        let decision = c.classify_with_decision("1234567890");
        assert_eq!(decision.source, MatchSource::Fallback { index: 0 });
        assert_eq!(decision.response, FALLBACKS[0]);
    }

    #[test]
    fn test_exam_rule() {
        let c = classifier();
        assert_eq!(rule_for(&c, "YKS puanım düşük").as_deref(), Some("exam_scores"));
    }
}
